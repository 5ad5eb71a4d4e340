//! Short clock-time formatting for message timestamps.
//!
//! Conversion from epoch milliseconds to local wall-clock time needs the
//! browser's `Date`; the formatting itself is a pure helper so it can be
//! tested natively.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Format hours and minutes as a zero-padded `HH:MM` string.
pub fn short_time(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

/// Format a millisecond epoch timestamp as local `HH:MM`.
///
/// Returns an empty string on the server; messages only arrive in the
/// browser, so SSR never renders a real timestamp.
pub fn message_time(timestamp_ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        short_time(date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = timestamp_ms;
        String::new()
    }
}
