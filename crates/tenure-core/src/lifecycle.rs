// Rust guideline compliant 2026-10-12

//! Lifecycle fields shared by contracts, minutes and amendments.
//!
//! [`LifecycleColumns`] is the storage shape (snake_case, ISO dates, nullable
//! override). [`LifecycleView`] is the domain shape (camelCase, display dates,
//! derived day count and status). Both are flattened into the record structs
//! so the field renaming lives in serde attributes rather than mapping code.

use crate::dates::{days_until, parse_date, to_display, to_storage};
use crate::status::{resolve_status_within, serialize_stored, ManualStatus, Status};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle columns as persisted in a storage row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LifecycleColumns {
    /// Start date, `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// End date, `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Manual override, `null` when automatic.
    #[serde(default, serialize_with = "serialize_stored")]
    pub manual_status: ManualStatus,
}

impl LifecycleColumns {
    /// Builds columns from display-form dates.
    ///
    /// Dates that do not convert are left absent.
    pub fn from_display(start_date: &str, end_date: &str, manual_status: ManualStatus) -> Self {
        Self {
            start_date: to_storage(start_date),
            end_date: to_storage(end_date),
            manual_status,
        }
    }

    /// Applies display-form edits.
    ///
    /// `None` leaves a field untouched. A date that does not convert to
    /// storage form is also left untouched.
    pub fn apply_display(
        &mut self,
        start_date: Option<&str>,
        end_date: Option<&str>,
        manual_status: Option<ManualStatus>,
    ) {
        if let Some(start) = start_date.and_then(to_storage) {
            self.start_date = Some(start);
        }
        if let Some(end) = end_date.and_then(to_storage) {
            self.end_date = Some(end);
        }
        if let Some(manual) = manual_status {
            self.manual_status = manual;
        }
    }

    /// Derives the domain view against a reference date.
    ///
    /// # Arguments
    ///
    /// * `today` - Reference date for the day count
    /// * `warning_days` - Width of the warning window
    ///
    /// # Returns
    ///
    /// The display dates, signed day count and resolved status.
    pub fn resolve(&self, today: NaiveDate, warning_days: u32) -> LifecycleView {
        let start = self.start_date.as_deref().unwrap_or_default();
        let end = self.end_date.as_deref().unwrap_or_default();
        let days_remaining = days_until(end, today);

        LifecycleView {
            start_date: to_display(start),
            end_date: to_display(end),
            manual_status: self.manual_status,
            days_remaining,
            status: resolve_status_within(days_remaining, self.manual_status, warning_days),
        }
    }

    /// Checks that the start date does not fall after the end date.
    ///
    /// Dates that do not parse are not checked.
    pub fn check_order(&self) -> crate::Result<()> {
        let start = self.start_date.as_deref().and_then(parse_date);
        let end = self.end_date.as_deref().and_then(parse_date);

        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(crate::Error::InvalidRecord(format!(
                    "Start date {} is after end date {}",
                    start, end
                )));
            }
        }

        Ok(())
    }
}

/// Lifecycle fields as presented by the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleView {
    /// Start date, `DD/MM/YYYY`.
    pub start_date: String,
    /// End date, `DD/MM/YYYY`.
    pub end_date: String,
    /// Manual override, `null` when automatic.
    #[serde(serialize_with = "serialize_stored")]
    pub manual_status: ManualStatus,
    /// Signed days until the end date.
    pub days_remaining: i64,
    /// Derived status.
    pub status: Status,
}

impl LifecycleView {
    /// Converts back to storage columns, dropping the derived fields.
    pub fn to_columns(&self) -> LifecycleColumns {
        LifecycleColumns::from_display(&self.start_date, &self.end_date, self.manual_status)
    }
}
