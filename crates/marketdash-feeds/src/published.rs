//! Publish-date parsing and "N hours ago" formatting.
//!
//! Feeds disagree on date formats, so parsing tries a fixed list of shapes and
//! gives up quietly. Nothing here returns an error: an unreadable date is
//! shown as-is and never causes an item to be dropped.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Characters of an unparseable date kept for display.
const RAW_DATE_DISPLAY_CHARS: usize = 20;

const JUST_NOW: &str = "Just now";

/// Parse a feed date, trying each known format in turn.
///
/// Zone-less values are taken as UTC.
#[must_use]
pub fn parse_published(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%a, %d %b %Y %H:%M:%S") {
        return Some(naive.and_utc().fixed_offset());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc().fixed_offset());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Describe how long ago `raw` was, relative to the current time.
#[must_use]
pub fn format_relative_age(raw: &str) -> String {
    format_relative_age_at(raw, Utc::now())
}

/// Describe how long ago `raw` was, relative to `now`.
///
/// Unparseable input is clipped to its first 20 characters; empty input reads
/// `"Just now"`.
#[must_use]
pub fn format_relative_age_at(raw: &str, now: DateTime<Utc>) -> String {
    match parse_published(raw) {
        Some(at) => relative_age(at, now),
        None => {
            let raw = raw.trim();
            if raw.is_empty() {
                JUST_NOW.to_string()
            } else {
                raw.chars().take(RAW_DATE_DISPLAY_CHARS).collect()
            }
        }
    }
}

/// Render the distance from `at` to `now`.
///
/// Timestamps in the future (clock skew between publishers) read `"Just now"`;
/// anything a week or older is shown as an absolute date.
#[must_use]
pub fn relative_age(at: DateTime<FixedOffset>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at.with_timezone(&Utc));
    if elapsed.num_seconds() < 0 {
        return JUST_NOW.to_string();
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{minutes} min ago");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{hours} hours ago")
        };
    }

    match elapsed.num_days() {
        1 => "1 day ago".to_string(),
        days @ 2..=6 => format!("{days} days ago"),
        _ => at.format("%b %d, %Y").to_string(),
    }
}
