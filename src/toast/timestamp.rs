//! Toast timestamp format
//!
//! Toast writes and expects UTC instants as `2024-05-01T14:03:11.123+0000`:
//! millisecond precision and a `+0000` offset instead of `Z`.

use chrono::{DateTime, SecondsFormat, Utc};

const TOAST_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Format an instant for the order listing query parameters.
pub fn format(at: DateTime<Utc>) -> String {
    let iso = at.to_rfc3339_opts(SecondsFormat::Millis, true);
    match iso.strip_suffix('Z') {
        Some(stem) => format!("{stem}+0000"),
        None => iso,
    }
}

/// Parse an upstream timestamp. Accepts both `+0000` and RFC 3339 offsets.
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, TOAST_FORMAT))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
