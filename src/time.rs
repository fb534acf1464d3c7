//! Minute arithmetic over upstream timestamps.
//!
//! Upstream times are ISO-8601 strings. They are parsed on demand and never
//! rejected at decode time, so a malformed value only ever degrades the stop
//! or vehicle it belongs to.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const MILLIS_PER_MINUTE: u64 = 60_000;

// `%#z` takes `Z`, `+01:00`, `+0100` or `+01`.
const OFFSET_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

// Offset-less date-times are taken as UTC.
const NAIVE_DATE_TIME_FORMATS: &[&str] =
    &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parses an upstream timestamp into an instant.
///
/// Accepts RFC 3339 (`2025-05-05T10:00:00Z`, `2025-05-05T11:00:00+01:00`),
/// minute-precision times with an offset (`2025-05-05T10:00Z`), numeric
/// offsets without a colon, offset-less date-times and bare dates
/// (`2025-05-05`, `2025/05/05`) at midnight UTC. Returns `None` for anything
/// else, including out-of-range components such as `2025-13-45`.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in OFFSET_DATE_TIME_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(value, format) {
            return Some(instant.with_timezone(&Utc));
        }
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    DATE_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(value, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc())
    })
}

/// Returns `true` when `value` parses to a calendar date/time.
#[must_use]
pub fn is_valid_timestamp(value: &str) -> bool {
    parse_timestamp(value).is_some()
}

/// Signed whole minutes from `comparable` to `target`.
///
/// Positive when `target` is later. Half minutes round away from zero, so
/// `difference_in_minutes(a, b) == -difference_in_minutes(b, a)` always holds.
#[must_use]
pub fn difference_in_minutes(target: DateTime<Utc>, comparable: DateTime<Utc>) -> i64 {
    let millis = (target - comparable).num_milliseconds();
    let minutes = (millis.unsigned_abs() + MILLIS_PER_MINUTE / 2) / MILLIS_PER_MINUTE;
    let minutes = i64::try_from(minutes).unwrap_or(i64::MAX);

    if millis < 0 { -minutes } else { minutes }
}
