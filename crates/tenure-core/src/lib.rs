// Rust guideline compliant 2026-10-12

//! Tenure Core Library
//!
//! This crate provides the foundational components of the Tenure records
//! back-office:
//! - Date normalization between `DD/MM/YYYY` and `YYYY-MM-DD`
//! - Status derivation (active, warning, expired, manual overrides)
//! - Record models (contracts, minutes, amendments) and their storage rows
//! - JSONL table storage
//! - Audit log entries
//! - Configuration and error types

pub mod audit;
pub mod config;
pub mod dates;
pub mod error;
pub mod identity;
pub mod lifecycle;
pub mod models;
pub mod status;
pub mod storage;

pub use audit::{AuditAction, AuditEntry};
pub use config::{Config, OutputFormat};
pub use dates::{days_until, parse_to_day_count, to_display, to_storage};
pub use error::{Error, Result};
pub use lifecycle::{LifecycleColumns, LifecycleView};
pub use models::{
    Amendment, AmendmentKind, AmendmentRow, Contract, ContractRow, Keyed, Minute, MinuteRow,
    Record, RecordInput, Row, Table,
};
pub use status::{resolve_status, resolve_status_within, ManualStatus, Status};
pub use storage::Storage;
