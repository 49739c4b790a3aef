//! Shared utility functions for output formatting

use chrono::{DateTime, Utc};

/// Format a size in bytes for display, `-` when unknown.
pub fn format_size(bytes: Option<u64>) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    match bytes {
        None => "-".to_string(),
        Some(b) if b >= MB => format!("{:.1} MB", b as f64 / MB as f64),
        Some(b) if b >= KB => format!("{:.1} KB", b as f64 / KB as f64),
        Some(b) => format!("{} B", b),
    }
}

/// Short calendar date such as `Mar 9, 2024`, `-` when unknown.
pub fn format_date(time: Option<&DateTime<Utc>>) -> String {
    time.map(|t| t.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Substitute the first `{path}` in `template`.
pub fn render_title(template: &str, path: &str) -> String {
    template.replacen("{path}", path, 1)
}
