//! Date/time utilities for Agora.
//!
//! All timestamps in the API are ISO-8601 / RFC 3339 strings with an
//! explicit UTC offset (`+00:00`).

use chrono::{DateTime, SecondsFormat, Utc};

/// Current UTC time as an RFC 3339 string with `+00:00` offset.
pub fn now_rfc3339() -> String {
    to_rfc3339(&Utc::now())
}

/// Format a UTC datetime as an RFC 3339 string with `+00:00` offset.
pub fn to_rfc3339(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Parse an RFC 3339 string back into a UTC datetime.
///
/// Returns `None` if the string is not a valid RFC 3339 timestamp.
pub fn parse_rfc3339(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
