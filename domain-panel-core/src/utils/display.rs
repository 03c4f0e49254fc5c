//! Display helpers for dates and table cells

use chrono::{DateTime, NaiveDate, Utc};

/// Formats a date as e.g. "Dec 15, 2026"
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Days remaining until `expiration`, counted from `now`.
///
/// A partial day counts as a full one, so an expiration later today
/// still reads as 1 day. Past dates clamp to 0.
#[must_use]
pub fn days_left(expiration: NaiveDate, now: DateTime<Utc>) -> i64 {
    let midnight = expiration.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
    let seconds = (midnight - now).num_seconds();
    if seconds <= 0 {
        0
    } else {
        (seconds + 86_399) / 86_400
    }
}

/// Truncates `text` to `max_chars` characters, appending "..." when cut
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn format_date_is_short_month() {
        assert_eq!(format_date(date(2026, 12, 15)), "Dec 15, 2026");
        assert_eq!(format_date(date(2025, 1, 3)), "Jan 03, 2025");
    }

    #[test]
    fn days_left_counts_whole_days() {
        let now = Utc.with_ymd_and_hms(2025, 12, 10, 0, 0, 0).unwrap();
        assert_eq!(days_left(date(2025, 12, 15), now), 5);
    }

    #[test]
    fn days_left_rounds_partial_days_up() {
        let now = Utc.with_ymd_and_hms(2025, 12, 10, 18, 30, 0).unwrap();
        assert_eq!(days_left(date(2025, 12, 15), now), 5);
        let now = Utc.with_ymd_and_hms(2025, 12, 14, 23, 59, 59).unwrap();
        assert_eq!(days_left(date(2025, 12, 15), now), 1);
    }

    #[test]
    fn days_left_clamps_past_dates() {
        let now = Utc.with_ymd_and_hms(2025, 12, 10, 0, 0, 0).unwrap();
        assert_eq!(days_left(date(2025, 12, 10), now), 0);
        assert_eq!(days_left(date(2020, 1, 1), now), 0);
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly-10", 10), "exactly-10");
    }

    #[test]
    fn truncate_cuts_long_text() {
        assert_eq!(truncate_text("a-rather-long-value", 6), "a-rath...");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_text("日本語ドメイン", 3), "日本語...");
    }
}
