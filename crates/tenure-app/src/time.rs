// Rust guideline compliant 2026-10-12

//! Timestamp helpers for Tenure.

use chrono::{Local, SecondsFormat, Utc};

/// Returns the current Unix timestamp in seconds.
pub fn unix_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Returns the current local time as an RFC 3339 string.
pub fn rfc3339_now() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}
