// Rust guideline compliant 2026-10-12

//! Listing, filtering and sorting of derived records.

use crate::error::{AppError, Result};
use chrono::NaiveDate;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::str::FromStr;
use tenure_core::dates::parse_date;
use tenure_core::{Record, Status};

/// Field to sort listed records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Signed days until the end date; soonest first.
    #[default]
    DaysRemaining,
    /// End date; records without one sort last.
    EndDate,
    /// Record number.
    Number,
    /// Last update; newest first.
    UpdatedAt,
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "days_remaining" | "days" => Ok(SortField::DaysRemaining),
            "end_date" | "end" => Ok(SortField::EndDate),
            "number" => Ok(SortField::Number),
            "updated_at" | "updated" => Ok(SortField::UpdatedAt),
            _ => Err(AppError::InvalidInput(format!(
                "Invalid sort field: {}",
                value
            ))),
        }
    }
}

/// List options for filtering and sorting records.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Filter by derived status.
    pub status: Option<Status>,
    /// Case-insensitive substring match over the record's text fields.
    pub search: Option<String>,
    /// Keep records still running that end within this many days.
    pub ending_within: Option<u32>,
    /// Keep records belonging to this parent (amendments of a contract).
    pub parent_id: Option<String>,
    /// Sort field.
    pub sort: SortField,
    /// Reverse the sort order.
    pub reverse: bool,
    /// Maximum number of records to return.
    pub limit: Option<usize>,
}

/// Parses a status filter string.
///
/// # Errors
///
/// Returns an error if the status is unknown.
pub fn parse_status(value: &str) -> Result<Status> {
    value
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("Invalid status filter: {}", value)))
}

/// Filters and sorts records based on `ListOptions`.
///
/// # Arguments
///
/// * `records` - Derived records
/// * `options` - List options
///
/// # Returns
///
/// The filtered, sorted and truncated list.
pub fn list_records<T: Record>(records: Vec<T>, options: &ListOptions) -> Vec<T> {
    let mut records = apply_filters(records, options);
    sort_records(&mut records, options.sort);

    if options.reverse {
        records.reverse();
    }
    if let Some(limit) = options.limit {
        records.truncate(limit);
    }

    records
}

fn apply_filters<T: Record>(records: Vec<T>, options: &ListOptions) -> Vec<T> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    let needle = options
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let predicate = |r: &T| {
        let lifecycle = r.lifecycle();

        if let Some(status) = options.status {
            if lifecycle.status != status {
                return false;
            }
        }

        if let Some(window) = options.ending_within {
            if lifecycle.status.is_manual()
                || lifecycle.days_remaining < 0
                || lifecycle.days_remaining > i64::from(window)
            {
                return false;
            }
        }

        if let Some(parent) = options.parent_id.as_deref() {
            if r.parent_id() != Some(parent) {
                return false;
            }
        }

        if let Some(needle) = needle.as_deref() {
            if !r
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
            {
                return false;
            }
        }

        true
    };

    if records.len() >= PARALLEL_THRESHOLD {
        records.into_par_iter().filter(|r| predicate(r)).collect()
    } else {
        records.into_iter().filter(predicate).collect()
    }
}

fn end_date<T: Record>(record: &T) -> Option<NaiveDate> {
    parse_date(&record.lifecycle().end_date)
}

fn sort_records<T: Record>(records: &mut [T], field: SortField) {
    match field {
        SortField::DaysRemaining => records.sort_by(|a, b| {
            a.lifecycle()
                .days_remaining
                .cmp(&b.lifecycle().days_remaining)
                .then_with(|| a.number().cmp(b.number()))
        }),
        SortField::EndDate => records.sort_by(|a, b| match (end_date(a), end_date(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.number().cmp(b.number()),
        }),
        SortField::Number => records.sort_by(|a, b| a.number().cmp(b.number())),
        SortField::UpdatedAt => records.sort_by(|a, b| b.updated_at().cmp(&a.updated_at())),
    }
}
