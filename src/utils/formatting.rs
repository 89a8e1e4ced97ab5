//! Formatting utilities used for CLI outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Fixed two-decimal hour rendering used in listings and messages.
pub fn fmt_hours(hours: Option<f64>) -> String {
    match hours {
        Some(h) => format!("{:.2}", h),
        None => "--".to_string(),
    }
}
