// Rust guideline compliant 2026-10-12

//! Audit log entries.

use crate::models::{Keyed, Table};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of change recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// A record was created.
    Create,
    /// A record was edited.
    Update,
    /// A record was deleted.
    Delete,
}

impl AuditAction {
    /// Returns the snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            AuditAction::Create => "create",
            AuditAction::Update => "update",
            AuditAction::Delete => "delete",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "create" | "insert" => Ok(AuditAction::Create),
            "update" => Ok(AuditAction::Update),
            "delete" => Ok(AuditAction::Delete),
            _ => Err(Error::InvalidValue(format!("Unknown audit action: {}", value))),
        }
    }
}

/// One append-only audit log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unique identifier (`aud-XXXXXXXX`).
    pub id: String,
    /// RFC 3339 timestamp of the change.
    pub at: String,
    /// Who made the change.
    pub actor: String,
    pub action: AuditAction,
    /// Table of the changed record.
    pub table: Table,
    pub record_id: String,
    /// Human-readable description of the change.
    #[serde(default)]
    pub detail: String,
}

impl Keyed for AuditEntry {
    fn key(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidRecord("Audit entry ID cannot be empty".to_string()));
        }
        if self.record_id.trim().is_empty() {
            return Err(Error::InvalidRecord(
                "Audit entry must reference a record".to_string(),
            ));
        }
        Ok(())
    }
}
