// Timer & score engine: one authoritative clock, two consumers (score decay
// and the throttled stats display).
use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Finished,
}

/// What the stats panel shows for time and score. Moves are not throttled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayStats {
    pub time_ms: u64,
    pub score: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScoreClock {
    pub phase: Phase,
    pub moves: u32,
    pub elapsed_ms: u64,
    pub score: u64,
    /// 0..=100, written once when the game finishes.
    pub final_score: Option<u8>,
    pub display: DisplayStats,
    initial_score: u64,
    score_step: u64,
    tick_ms: u64,
    display_refresh_ms: u64,
}

impl ScoreClock {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: Phase::NotStarted,
            moves: 0,
            elapsed_ms: 0,
            score: config.initial_score,
            final_score: None,
            display: DisplayStats {
                time_ms: 0,
                score: config.initial_score,
            },
            initial_score: config.initial_score,
            score_step: config.score_step,
            tick_ms: config.tick_ms.max(1),
            display_refresh_ms: config.display_refresh_ms.max(1),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    pub fn initial_score(&self) -> u64 {
        self.initial_score
    }

    /// Counts a successful move and charges the per-move penalty.
    pub fn record_move(&mut self) {
        self.moves = self.moves.saturating_add(1);
        self.score = self.score.saturating_sub(self.score_step);
    }

    /// `NotStarted -> Running`. Pushes the current values to the display right
    /// away. Returns false if the clock had already left `NotStarted`.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        self.phase = Phase::Running;
        self.refresh_display();
        true
    }

    /// Advances the clock by one tick while running. Returns whether anything
    /// changed.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let before = self.elapsed_ms;
        self.elapsed_ms = self.elapsed_ms.saturating_add(self.tick_ms);
        self.score = self.score.saturating_sub(self.tick_ms);
        if before / self.display_refresh_ms != self.elapsed_ms / self.display_refresh_ms {
            self.refresh_display();
        }
        true
    }

    /// Stops the clock for good and fixes the final score. Calling it again
    /// returns the score computed the first time.
    pub fn finish(&mut self) -> u8 {
        if let Some(done) = self.final_score {
            return done;
        }
        self.phase = Phase::Finished;
        let scaled = scale_score(self.score, self.initial_score);
        self.final_score = Some(scaled);
        self.refresh_display();
        scaled
    }

    fn refresh_display(&mut self) {
        self.display = DisplayStats {
            time_ms: self.elapsed_ms,
            score: self.score,
        };
    }
}

/// Maps `[0, initial]` linearly onto `[0, 100]`, rounding to the nearest point.
pub fn scale_score(score: u64, initial: u64) -> u8 {
    if initial == 0 {
        return 0;
    }
    let clamped = score.min(initial) as f64;
    (clamped * 100.0 / initial as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::INITIAL_SCORE;

    fn clock() -> ScoreClock {
        ScoreClock::new(&GameConfig::default())
    }

    #[test]
    fn final_score_scaling() {
        assert_eq!(scale_score(INITIAL_SCORE, INITIAL_SCORE), 100);
        assert_eq!(scale_score(0, INITIAL_SCORE), 0);
        assert_eq!(scale_score(INITIAL_SCORE / 2, INITIAL_SCORE), 50);
        assert_eq!(scale_score(INITIAL_SCORE * 2, INITIAL_SCORE), 100);
        assert_eq!(scale_score(1_499, 300_000), 0);
        assert_eq!(scale_score(1_500, 300_000), 1);
        assert_eq!(scale_score(10, 0), 0);
    }

    #[test]
    fn ticks_are_ignored_until_started() {
        let mut c = clock();
        assert!(!c.tick());
        assert_eq!(c.elapsed_ms, 0);
        assert_eq!(c.score, INITIAL_SCORE);
    }

    #[test]
    fn running_clock_decays_score() {
        let mut c = clock();
        assert!(c.start());
        assert!(!c.start());
        for _ in 0..5 {
            assert!(c.tick());
        }
        assert_eq!(c.elapsed_ms, 50);
        assert_eq!(c.score, INITIAL_SCORE - 50);
    }

    #[test]
    fn display_refreshes_once_per_second() {
        let mut c = clock();
        c.record_move();
        c.start();
        assert_eq!(c.display, DisplayStats { time_ms: 0, score: INITIAL_SCORE - 10 });
        for _ in 0..99 {
            c.tick();
        }
        assert_eq!(c.display.time_ms, 0);
        c.tick();
        assert_eq!(c.display.time_ms, 1000);
        assert_eq!(c.display.score, INITIAL_SCORE - 10 - 1000);
    }

    #[test]
    fn score_is_floored_at_zero() {
        let config = GameConfig {
            initial_score: 25,
            ..GameConfig::default()
        };
        let mut c = ScoreClock::new(&config);
        c.record_move();
        c.start();
        let mut last = c.score;
        for _ in 0..10 {
            c.tick();
            assert!(c.score <= last);
            last = c.score;
        }
        assert_eq!(c.score, 0);
        c.record_move();
        assert_eq!(c.score, 0);
        assert_eq!(c.moves, 2);
    }

    #[test]
    fn finish_is_final() {
        let mut c = clock();
        c.start();
        c.tick();
        let first = c.finish();
        assert!(c.is_finished());
        assert!(!c.tick());
        c.score = 0;
        assert_eq!(c.finish(), first);
        assert_eq!(c.final_score, Some(first));
    }
}
