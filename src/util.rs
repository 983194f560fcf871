// Small helpers shared by the model and the components.

/// Renders elapsed milliseconds as `h:mm:ss`.
pub fn format_time(ms: u64) -> String {
    let secs = ms / 1000;
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    format!("{}:{:02}:{:02}", h, m, s)
}

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_minutes_seconds() {
        assert_eq!(format_time(0), "0:00:00");
        assert_eq!(format_time(999), "0:00:00");
        assert_eq!(format_time(61_000), "0:01:01");
        assert_eq!(format_time(3_723_000), "1:02:03");
    }
}
