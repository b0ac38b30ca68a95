//! Display formatting for article text and timestamps.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use chrono::NaiveDateTime;

use crate::config::PREVIEW_CHARS;

/// First [`PREVIEW_CHARS`] characters of an article body, always followed by
/// an ellipsis. Counts characters, not bytes, so CJK text is never split.
pub fn preview(content: &str) -> String {
    let mut out: String = content.chars().take(PREVIEW_CHARS).collect();
    out.push_str("...");
    out
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| chrono::DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}

/// `YYYY-MM-DD` for listing cards; unparsable input is returned verbatim.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |dt| dt.format("%Y-%m-%d").to_string())
}

/// `YYYY-MM-DD HH:MM` for the detail page; unparsable input is returned verbatim.
pub fn format_datetime(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |dt| dt.format("%Y-%m-%d %H:%M").to_string())
}
