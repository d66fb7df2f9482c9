//! Raw model record -> `(remaining, countdown)`.

use chrono::{DateTime, Utc};
use quota_widget_types::{ParsedQuota, RawModelQuota, Remaining};

/// Normalize one raw record.
///
/// A reported fraction always wins; a reset time without a fraction means the
/// window is exhausted; neither means no limit. Only an empty `resetTime`
/// string counts as absent; whitespace is present but unparseable.
pub fn parse_quota(raw: &RawModelQuota, now: DateTime<Utc>) -> ParsedQuota {
    let reset_time = raw.reset_time.as_deref().filter(|s| !s.is_empty());

    let remaining = match (raw.remaining_fraction, reset_time) {
        (Some(fraction), _) => Remaining::Fraction(fraction),
        (None, Some(_)) => Remaining::Exceeded,
        (None, None) => Remaining::Unlimited,
    };

    let reset_countdown = reset_time.map(|s| reset_countdown(s, now)).unwrap_or_default();

    ParsedQuota { remaining, reset_countdown }
}

/// Countdown text until `reset_time`, or empty when it cannot be parsed or is
/// not strictly in the future.
pub fn reset_countdown(reset_time: &str, now: DateTime<Utc>) -> String {
    let Some(reset_at) = parse_reset_time(reset_time) else {
        return String::new();
    };
    if reset_at <= now {
        return String::new();
    }
    format_minutes((reset_at - now).num_minutes())
}

/// Parse an RFC 3339 timestamp and normalize it to UTC.
pub fn parse_reset_time(reset_time: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(reset_time.trim()) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            tracing::debug!("[Parser] unparseable resetTime '{}': {}", reset_time, e);
            None
        },
    }
}

/// `"<h>h <m>m"`, or `"<m>m"` when under an hour.
pub fn format_minutes(total_minutes: i64) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
