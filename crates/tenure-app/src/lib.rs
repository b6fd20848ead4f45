// Rust guideline compliant 2026-10-12

//! Shared application services for Tenure.
//!
//! This crate provides reusable, non-CLI-specific services: workspace
//! discovery, the persistence backend, the record service with derived
//! status, list filtering, the dashboard summary, the audit log and
//! standardized response envelopes.

pub mod audit;
pub mod backend;
pub mod error;
pub mod list;
pub mod response;
pub mod service;
pub mod summary;
pub mod time;
pub mod workspace;

pub use audit::{record_entry, AuditQuery};
pub use backend::{Backend, JsonlBackend};
pub use error::{AppError, ErrorCode, Result};
pub use list::{list_records, parse_status, ListOptions, SortField};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use service::RecordService;
pub use summary::{ExpiringRecord, KindSummary, StatusCounts, Summary};
pub use time::{rfc3339_now, unix_timestamp};
pub use workspace::Workspace;
