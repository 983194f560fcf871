//! Game tuning knobs. Everything is a compile-time default except the grid
//! length, which the page URL may override with `?size=N`.

/// Smallest playable grid; anything below is clamped up.
pub const MIN_LENGTH: usize = 3;
/// Largest grid accepted from the page parameter.
pub const MAX_LENGTH: usize = 8;
/// Change this to increase/decrease difficulty.
pub const DEFAULT_LENGTH: usize = 3;

/// Five minutes expressed in milliseconds.
pub const INITIAL_SCORE: u64 = 5 * 60 * 1000;
/// Subtracted from the score for every successful move.
pub const SCORE_STEP: u64 = 10;
/// Resolution of the authoritative clock.
pub const TICK_MS: u64 = 10;
/// How often the stats panel picks up the running time and score.
pub const DISPLAY_REFRESH_MS: u64 = 1000;

pub const BOARD_PX: f64 = 450.0;
pub const IMAGE_URL: &str = "assets/puzzle.jpg";
pub const RECORDS_KEY: &str = "mm_puzzle";

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub length: usize,
    pub initial_score: u64,
    pub score_step: u64,
    pub tick_ms: u64,
    pub display_refresh_ms: u64,
    pub board_px: f64,
    pub image_url: String,
    pub records_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            initial_score: INITIAL_SCORE,
            score_step: SCORE_STEP,
            tick_ms: TICK_MS,
            display_refresh_ms: DISPLAY_REFRESH_MS,
            board_px: BOARD_PX,
            image_url: IMAGE_URL.to_string(),
            records_key: RECORDS_KEY.to_string(),
        }
    }
}

impl GameConfig {
    /// Same as `Default`, but with `length` clamped to the playable range.
    pub fn with_length(length: usize) -> Self {
        Self {
            length: clamp_length(length),
            ..Self::default()
        }
    }

    /// Builds a config from a `location.search` string such as `?size=4`.
    /// Unknown keys are ignored; a missing or unparsable size keeps the default.
    pub fn from_query(search: &str) -> Self {
        let length = search
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "size")
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_LENGTH);
        Self::with_length(length)
    }

    /// Reads the page URL; falls back to defaults off-browser.
    pub fn from_page() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let search = web_sys::window()
                .and_then(|win| win.location().search().ok())
                .unwrap_or_default();
            Self::from_query(&search)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::default()
        }
    }
}

pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_size_is_parsed_and_clamped() {
        assert_eq!(GameConfig::from_query("?size=4").length, 4);
        assert_eq!(GameConfig::from_query("?debug=1&size=5").length, 5);
        assert_eq!(GameConfig::from_query("?size=1").length, MIN_LENGTH);
        assert_eq!(GameConfig::from_query("?size=99").length, MAX_LENGTH);
    }

    #[test]
    fn bad_or_missing_size_keeps_default() {
        assert_eq!(GameConfig::from_query("").length, DEFAULT_LENGTH);
        assert_eq!(GameConfig::from_query("?size=abc").length, DEFAULT_LENGTH);
        assert_eq!(GameConfig::from_query("?other=7").length, DEFAULT_LENGTH);
    }
}
