// Rust guideline compliant 2026-10-12

//! Lifecycle status derivation.
//!
//! A record's status is never stored. It is resolved on every read from the
//! signed day count to its end date and the optional manual override:
//!
//! - Executed / Rescinded override → returned unchanged
//! - days remaining < 0 → Expired
//! - days remaining <= warning window → Warning
//! - otherwise → Active

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Default warning window in days.
pub const DEFAULT_WARNING_DAYS: u32 = 30;

/// Administrator-set override of the date-derived status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ManualStatus {
    /// No override; status follows the end date.
    #[default]
    Automatic,
    /// The record was executed in full.
    Executed,
    /// The record was rescinded.
    Rescinded,
}

impl ManualStatus {
    /// Interprets a stored override value.
    ///
    /// Absent values and any string other than `executed` or `rescinded`
    /// mean no override.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("executed") => ManualStatus::Executed,
            Some("rescinded") => ManualStatus::Rescinded,
            _ => ManualStatus::Automatic,
        }
    }

    /// Returns the value to persist, `None` for automatic.
    pub fn to_stored(self) -> Option<&'static str> {
        match self {
            ManualStatus::Automatic => None,
            other => Some(other.as_str()),
        }
    }

    /// Returns the snake_case name of the override.
    pub fn as_str(self) -> &'static str {
        match self {
            ManualStatus::Automatic => "automatic",
            ManualStatus::Executed => "executed",
            ManualStatus::Rescinded => "rescinded",
        }
    }

    /// Returns the status this override forces, if any.
    pub fn forced_status(self) -> Option<Status> {
        match self {
            ManualStatus::Automatic => None,
            ManualStatus::Executed => Some(Status::Executed),
            ManualStatus::Rescinded => Some(Status::Rescinded),
        }
    }
}

impl<'de> Deserialize<'de> for ManualStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        Ok(ManualStatus::from_stored(value.as_deref()))
    }
}

impl fmt::Display for ManualStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ManualStatus {
    type Err = Error;

    /// Strict parse for user input; unlike [`ManualStatus::from_stored`]
    /// unknown values are rejected.
    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "automatic" | "auto" | "none" => Ok(ManualStatus::Automatic),
            "executed" => Ok(ManualStatus::Executed),
            "rescinded" => Ok(ManualStatus::Rescinded),
            _ => Err(Error::InvalidValue(format!(
                "Unknown manual status: {}",
                value
            ))),
        }
    }
}

/// Serializes a [`ManualStatus`] for a storage row, writing `null` for
/// automatic.
pub fn serialize_stored<S>(status: &ManualStatus, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    status.to_stored().serialize(serializer)
}

/// Derived lifecycle status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// More than the warning window remains.
    Active,
    /// Ends within the warning window, or today.
    Warning,
    /// End date has passed.
    Expired,
    /// Manually marked as executed.
    Executed,
    /// Manually marked as rescinded.
    Rescinded,
}

impl Status {
    /// All statuses in display order.
    pub const ALL: [Status; 5] = [
        Status::Active,
        Status::Warning,
        Status::Expired,
        Status::Executed,
        Status::Rescinded,
    ];

    /// Returns the snake_case name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Warning => "warning",
            Status::Expired => "expired",
            Status::Executed => "executed",
            Status::Rescinded => "rescinded",
        }
    }

    /// Returns true if the status came from a manual override.
    pub fn is_manual(self) -> bool {
        matches!(self, Status::Executed | Status::Rescinded)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "active" => Ok(Status::Active),
            "warning" => Ok(Status::Warning),
            "expired" => Ok(Status::Expired),
            "executed" => Ok(Status::Executed),
            "rescinded" => Ok(Status::Rescinded),
            _ => Err(Error::InvalidValue(format!("Unknown status: {}", value))),
        }
    }
}

/// Resolves a status with the default 30-day warning window.
///
/// # Arguments
///
/// * `days_remaining` - Signed days until the end date
/// * `manual` - Manual override
///
/// # Returns
///
/// The lifecycle status. Every input pair maps to exactly one status.
pub fn resolve_status(days_remaining: i64, manual: ManualStatus) -> Status {
    resolve_status_within(days_remaining, manual, DEFAULT_WARNING_DAYS)
}

/// Resolves a status with a caller-chosen warning window.
pub fn resolve_status_within(days_remaining: i64, manual: ManualStatus, warning_days: u32) -> Status {
    if let Some(forced) = manual.forced_status() {
        return forced;
    }

    if days_remaining < 0 {
        Status::Expired
    } else if days_remaining <= i64::from(warning_days) {
        Status::Warning
    } else {
        Status::Active
    }
}
