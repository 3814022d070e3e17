//! Diagnostic output.
//!
//! Lines go to `esp_println` when the `esp32-log` feature is enabled and
//! compile away otherwise.

macro_rules! log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        esp_println::println!($($arg)*);
        #[cfg(not(feature = "esp32-log"))]
        let _ = format_args!($($arg)*);
    }};
}
