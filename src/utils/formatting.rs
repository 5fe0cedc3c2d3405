//! Formatting helpers for durations and balances.

/// Format seconds as "34h 05m" (sign preserved).
pub fn format_secs(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!("{}{}h {:02}m", sign, s / 3600, (s % 3600) / 60)
}

/// Seconds as decimal hours, rounded to two places (matches the admin UI).
pub fn secs_to_hours(secs: i64) -> f64 {
    (secs as f64 / 3600.0 * 100.0).round() / 100.0
}
