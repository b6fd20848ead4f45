// Rust guideline compliant 2026-10-12

//! Audit log recording and querying.

use crate::time::rfc3339_now;
use tenure_core::{identity, AuditAction, AuditEntry, Table};

/// Filters for reading the audit log.
#[derive(Debug, Clone, Default)]
pub struct AuditQuery {
    /// Only entries for this table.
    pub table: Option<Table>,
    /// Only entries whose record ID starts with this value.
    pub record_id: Option<String>,
    /// Only entries of this action.
    pub action: Option<AuditAction>,
    /// Maximum number of entries.
    pub limit: Option<usize>,
}

impl AuditQuery {
    /// Filters entries and returns them newest first.
    ///
    /// Entries are assumed to be in insertion order.
    pub fn apply(&self, entries: Vec<AuditEntry>) -> Vec<AuditEntry> {
        let record_prefix = self.record_id.as_deref().map(str::trim);

        let mut entries: Vec<AuditEntry> = entries
            .into_iter()
            .rev()
            .filter(|e| self.table.map_or(true, |t| e.table == t))
            .filter(|e| self.action.map_or(true, |a| e.action == a))
            .filter(|e| record_prefix.map_or(true, |p| e.record_id.starts_with(p)))
            .collect();

        if let Some(limit) = self.limit {
            entries.truncate(limit);
        }
        entries
    }
}

/// Builds a new audit entry stamped with the current time.
///
/// # Arguments
///
/// * `actor` - Who made the change
/// * `action` - Kind of change
/// * `table` - Table of the changed record
/// * `record_id` - Changed record
/// * `detail` - Human-readable description
/// * `existing` - IDs already in the log
pub fn record_entry<'a, I>(
    actor: &str,
    action: AuditAction,
    table: Table,
    record_id: &str,
    detail: String,
    existing: I,
) -> AuditEntry
where
    I: IntoIterator<Item = &'a str>,
{
    let at = rfc3339_now();
    let seed = format!("{}{}{}{}", at, action, table, record_id);
    let id = identity::generate_unique_id(
        Table::Audit.id_prefix(),
        &seed,
        crate::time::unix_timestamp(),
        existing,
    );

    AuditEntry {
        id,
        at,
        actor: actor.to_string(),
        action,
        table,
        record_id: record_id.to_string(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: u32, table: Table, action: AuditAction) -> AuditEntry {
        AuditEntry {
            id: format!("aud-{:08}", n),
            at: format!("2030-06-01T10:00:{:02}-03:00", n),
            actor: "admin".to_string(),
            action,
            table,
            record_id: format!("{}-{:08}", table.id_prefix(), n),
            detail: String::new(),
        }
    }

    fn log() -> Vec<AuditEntry> {
        vec![
            entry(1, Table::Contracts, AuditAction::Create),
            entry(2, Table::Minutes, AuditAction::Create),
            entry(3, Table::Contracts, AuditAction::Update),
            entry(4, Table::Contracts, AuditAction::Delete),
        ]
    }

    #[test]
    fn test_newest_first() {
        let entries = AuditQuery::default().apply(log());
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["aud-00000004", "aud-00000003", "aud-00000002", "aud-00000001"]);
    }

    #[test]
    fn test_filters_and_limit() {
        let query = AuditQuery {
            table: Some(Table::Contracts),
            action: Some(AuditAction::Create),
            ..AuditQuery::default()
        };
        assert_eq!(query.apply(log()).len(), 1);

        let query = AuditQuery {
            record_id: Some("ctr-".to_string()),
            limit: Some(2),
            ..AuditQuery::default()
        };
        let entries = query.apply(log());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "aud-00000004");
    }

    #[test]
    fn test_record_entry_avoids_existing_ids() {
        let first = record_entry(
            "admin",
            AuditAction::Create,
            Table::Minutes,
            "min-00000001",
            "Minute 1".to_string(),
            std::iter::empty(),
        );
        assert!(first.id.starts_with("aud-"));
        assert_eq!(first.record_id, "min-00000001");

        let second = record_entry(
            "admin",
            AuditAction::Create,
            Table::Minutes,
            "min-00000001",
            "Minute 1".to_string(),
            [first.id.as_str()],
        );
        assert_ne!(first.id, second.id);
    }
}
