//! CLI output formatting.

use std::time::Duration;

/// Format elapsed seconds with six decimal places.
#[must_use]
pub fn format_seconds(secs: f64) -> String {
    format!("{secs:.6}")
}

/// Format the operation-count trailer of a series.
#[must_use]
pub fn format_operations(ops: u64) -> String {
    format!("Operations: {ops}")
}

/// Format the usage line for the given program name.
#[must_use]
pub fn format_usage(program: &str) -> String {
    format!("Usage: {program} <method> <n>")
}

/// Format a duration for human-readable logs.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}
