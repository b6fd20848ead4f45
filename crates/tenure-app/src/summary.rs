// Rust guideline compliant 2026-10-12

//! Dashboard summary: status counts and records about to end.

use crate::backend::Backend;
use crate::error::Result;
use crate::service::RecordService;
use serde::Serialize;
use tenure_core::dates::format_display;
use tenure_core::{Amendment, Contract, Minute, Record, Row, Status, Table};

/// Counts of records per derived status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub active: usize,
    pub warning: usize,
    pub expired: usize,
    pub executed: usize,
    pub rescinded: usize,
    pub total: usize,
}

impl StatusCounts {
    fn add(&mut self, status: Status) {
        match status {
            Status::Active => self.active += 1,
            Status::Warning => self.warning += 1,
            Status::Expired => self.expired += 1,
            Status::Executed => self.executed += 1,
            Status::Rescinded => self.rescinded += 1,
        }
        self.total += 1;
    }

    /// Returns the count for a single status.
    #[must_use]
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Active => self.active,
            Status::Warning => self.warning,
            Status::Expired => self.expired,
            Status::Executed => self.executed,
            Status::Rescinded => self.rescinded,
        }
    }
}

/// A record in its warning window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringRecord {
    pub id: String,
    pub label: String,
    /// End date in display form.
    pub end_date: String,
    pub days_remaining: i64,
}

/// Summary of one record kind.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KindSummary {
    pub table: Table,
    pub counts: StatusCounts,
    /// Records in warning, soonest first.
    pub expiring: Vec<ExpiringRecord>,
}

impl KindSummary {
    fn from_records<T: Record>(records: &[T]) -> Self {
        let mut counts = StatusCounts::default();
        let mut expiring = Vec::new();

        for record in records {
            let lifecycle = record.lifecycle();
            counts.add(lifecycle.status);
            if lifecycle.status == Status::Warning {
                expiring.push(ExpiringRecord {
                    id: record.id().to_string(),
                    label: record.label(),
                    end_date: lifecycle.end_date.clone(),
                    days_remaining: lifecycle.days_remaining,
                });
            }
        }

        expiring.sort_by(|a, b| {
            a.days_remaining
                .cmp(&b.days_remaining)
                .then_with(|| a.id.cmp(&b.id))
        });

        Self {
            table: T::Row::TABLE,
            counts,
            expiring,
        }
    }
}

/// Summary across contracts, minutes and amendments.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Reference date in display form.
    pub today: String,
    pub warning_days: u32,
    pub kinds: Vec<KindSummary>,
}

impl Summary {
    /// Builds the summary from the service's current data.
    ///
    /// # Errors
    ///
    /// Returns an error if any table cannot be read.
    pub fn build<B: Backend>(service: &RecordService<B>) -> Result<Self> {
        let contracts = service.all::<Contract>()?;
        let minutes = service.all::<Minute>()?;
        let amendments = service.all::<Amendment>()?;

        Ok(Self {
            today: format_display(service.today()),
            warning_days: service.config().warning_days,
            kinds: vec![
                KindSummary::from_records(&contracts),
                KindSummary::from_records(&minutes),
                KindSummary::from_records(&amendments),
            ],
        })
    }

    /// Returns the summary for one table, if present.
    #[must_use]
    pub fn kind(&self, table: Table) -> Option<&KindSummary> {
        self.kinds.iter().find(|k| k.table == table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tenure_core::{LifecycleColumns, ManualStatus, MinuteRow};

    fn minute(id: &str, end: &str, manual: ManualStatus) -> Minute {
        let row = MinuteRow {
            id: id.to_string(),
            number: id.to_uppercase(),
            supplier: "Acme".to_string(),
            object: "Paper".to_string(),
            value: None,
            lifecycle: LifecycleColumns {
                start_date: Some("2030-01-01".to_string()),
                end_date: Some(end.to_string()),
                manual_status: manual,
            },
            created_at: 0,
            updated_at: 0,
        };
        Minute::from_row(row, NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(), 30)
    }

    #[test]
    fn test_counts_and_expiring_order() {
        let records = vec![
            minute("min-a", "2030-06-20", ManualStatus::Automatic),
            minute("min-b", "2030-06-03", ManualStatus::Automatic),
            minute("min-c", "2030-05-01", ManualStatus::Automatic),
            minute("min-d", "2030-06-02", ManualStatus::Rescinded),
            minute("min-e", "2031-01-01", ManualStatus::Automatic),
        ];
        let summary = KindSummary::from_records(&records);

        assert_eq!(summary.table, Table::Minutes);
        assert_eq!(summary.counts.total, 5);
        assert_eq!(summary.counts.get(Status::Warning), 2);
        assert_eq!(summary.counts.expired, 1);
        assert_eq!(summary.counts.rescinded, 1);
        assert_eq!(summary.counts.active, 1);

        let ids: Vec<&str> = summary.expiring.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["min-b", "min-a"]);
        assert_eq!(summary.expiring[0].end_date, "03/06/2030");
        assert_eq!(summary.expiring[0].days_remaining, 2);
    }

    #[test]
    fn test_serializes_camel_case() {
        let summary = KindSummary::from_records(&[minute("min-a", "2030-06-20", ManualStatus::Automatic)]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["table"], "minutes");
        assert_eq!(json["expiring"][0]["daysRemaining"], 19);
        assert_eq!(json["expiring"][0]["endDate"], "20/06/2030");
    }
}
