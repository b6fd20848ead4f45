// Rust guideline compliant 2026-10-12

//! Record service: CRUD over lifecycle records with derived status.
//!
//! Rows are loaded from the injected [`Backend`] and turned into domain
//! records against the service's reference date on every read, so status and
//! day count never drift from the stored dates.

use crate::audit::{record_entry, AuditQuery};
use crate::backend::Backend;
use crate::error::{AppError, Result};
use crate::list::{list_records, ListOptions};
use crate::summary::Summary;
use crate::time::unix_timestamp;
use chrono::NaiveDate;
use tenure_core::{
    identity, AuditAction, AuditEntry, Config, ContractRow, Keyed, Record, RecordInput, Row, Table,
};
use tracing::{debug, info, warn};

/// Attempts at inserting a new record before giving up on ID collisions.
const MAX_INSERT_ATTEMPTS: u32 = 5;

/// Service over lifecycle records.
#[derive(Debug, Clone)]
pub struct RecordService<B> {
    backend: B,
    config: Config,
    today: NaiveDate,
}

impl<B: Backend> RecordService<B> {
    /// Creates a service using the local current date.
    ///
    /// # Arguments
    ///
    /// * `backend` - Persistence backend
    /// * `config` - Loaded configuration
    pub fn new(backend: B, config: Config) -> Self {
        Self {
            backend,
            config,
            today: tenure_core::dates::today(),
        }
    }

    /// Pins the reference date used to derive day counts.
    #[must_use]
    pub fn at(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Returns the reference date.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn derive<T: Record>(&self, row: T::Row) -> T {
        T::from_row(row, self.today, self.config.warning_days)
    }

    fn find_row<R: Row>(&self, id: &str) -> Result<R> {
        let rows: Vec<R> = self.backend.load()?;
        let full_id = identity::resolve_partial(id, rows.iter().map(Keyed::key))?;
        rows.into_iter()
            .find(|row| row.key() == full_id)
            .ok_or_else(|| AppError::Core(tenure_core::Error::NotFound(full_id)))
    }

    /// Loads and derives every record of kind `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    pub fn all<T: Record>(&self) -> Result<Vec<T>> {
        let rows: Vec<T::Row> = self.backend.load()?;
        Ok(rows.into_iter().map(|row| self.derive::<T>(row)).collect())
    }

    /// Lists records of kind `T` with filtering and sorting.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    pub fn list<T: Record>(&self, options: &ListOptions) -> Result<Vec<T>> {
        Ok(list_records(self.all::<T>()?, options))
    }

    /// Gets a record by full or partial ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `AmbiguousId` if the ID does not resolve to
    /// exactly one record.
    pub fn get<T: Record>(&self, id: &str) -> Result<T> {
        Ok(self.derive::<T>(self.find_row::<T::Row>(id)?))
    }

    /// Creates a record.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing, the record fails
    /// validation, a referenced record does not exist, or the write fails.
    pub fn create<T: Record>(&self, input: &RecordInput) -> Result<T> {
        let input = self.resolve_references(T::Row::TABLE, input)?;
        let table = T::Row::TABLE;
        let now = unix_timestamp();

        let existing: Vec<T::Row> = self.backend.load()?;
        let mut taken: Vec<String> = existing.iter().map(|r| r.key().to_string()).collect();
        let seed = input.number.as_deref().unwrap_or_default();

        let mut attempt = 1;
        let row = loop {
            let id = identity::generate_unique_id(
                table.id_prefix(),
                seed,
                now,
                taken.iter().map(String::as_str),
            );
            let row = T::Row::from_input(id, &input, now)?;
            row.validate()?;

            // The table may have changed since it was loaded; the insert
            // itself runs under the table lock.
            match self.backend.insert(&row) {
                Ok(()) => break row,
                Err(AppError::Core(tenure_core::Error::DuplicateKey(id)))
                    if attempt < MAX_INSERT_ATTEMPTS =>
                {
                    debug!(table = %table, id, attempt, "generated ID already taken, retrying");
                    taken.push(id);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        };

        let record: T = self.derive::<T>(row);
        info!(table = %table, id = record.id(), "record created");
        self.audit(AuditAction::Create, table, record.id(), record.label());
        Ok(record)
    }

    /// Applies the supplied fields to an existing record.
    ///
    /// Dates that do not convert to storage form are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID does not resolve, the result fails
    /// validation, or the write fails.
    pub fn update<T: Record>(&self, id: &str, input: &RecordInput) -> Result<T> {
        let table = T::Row::TABLE;
        let mut row = self.find_row::<T::Row>(id)?;
        row.apply(input, unix_timestamp());
        row.validate()?;
        self.backend.save(&row)?;

        let record: T = self.derive::<T>(row);
        info!(table = %table, id = record.id(), "record updated");
        self.audit(AuditAction::Update, table, record.id(), record.label());
        Ok(record)
    }

    /// Deletes a record and returns it as it was.
    ///
    /// Contracts with amendments cannot be deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID does not resolve, the record is still
    /// referenced, or the write fails.
    pub fn delete<T: Record>(&self, id: &str) -> Result<T> {
        let table = T::Row::TABLE;
        let row = self.find_row::<T::Row>(id)?;

        if table == Table::Contracts {
            let referencing = self.amendment_count(row.key())?;
            if referencing > 0 {
                return Err(AppError::Conflict(format!(
                    "Contract {} has {} amendment(s); delete them first",
                    row.key(),
                    referencing
                )));
            }
        }

        self.backend.delete::<T::Row>(row.key())?;
        let record: T = self.derive::<T>(row);
        info!(table = %table, id = record.id(), "record deleted");
        self.audit(AuditAction::Delete, table, record.id(), record.label());
        Ok(record)
    }

    /// Builds the dashboard summary across all record kinds.
    ///
    /// # Errors
    ///
    /// Returns an error if any table cannot be read.
    pub fn summary(&self) -> Result<Summary> {
        Summary::build(self)
    }

    /// Queries the audit log, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read.
    pub fn audit_log(&self, query: &AuditQuery) -> Result<Vec<AuditEntry>> {
        Ok(query.apply(self.backend.load_audit()?))
    }

    /// Records a write in the audit log.
    ///
    /// The write itself has already been saved, so a failure here is logged
    /// and not returned.
    fn audit(&self, action: AuditAction, table: Table, record_id: &str, detail: String) {
        if !self.config.audit_enabled {
            debug!(%action, record_id, "audit disabled, not recording");
            return;
        }

        if let Err(err) = self.append_audit(action, table, record_id, detail) {
            warn!(
                %action,
                %table,
                record_id,
                error = %err,
                "record saved but audit entry was not written"
            );
        }
    }

    fn append_audit(
        &self,
        action: AuditAction,
        table: Table,
        record_id: &str,
        detail: String,
    ) -> Result<()> {
        let existing = self.backend.load_audit()?;
        let entry = record_entry(
            &self.config.actor,
            action,
            table,
            record_id,
            detail,
            existing.iter().map(Keyed::key),
        );
        self.backend.append_audit(&entry)
    }

    fn amendment_count(&self, contract_id: &str) -> Result<usize> {
        let rows: Vec<tenure_core::AmendmentRow> = self.backend.load()?;
        Ok(rows.iter().filter(|r| r.contract_id == contract_id).count())
    }

    /// Replaces a partial parent contract ID with the full one and checks it
    /// exists.
    fn resolve_references(&self, table: Table, input: &RecordInput) -> Result<RecordInput> {
        let mut input = input.clone();
        if table != Table::Amendments {
            return Ok(input);
        }

        let Some(partial) = input.contract_id.as_deref() else {
            return Err(AppError::InvalidInput(
                "Amendment requires a contract ID".to_string(),
            ));
        };

        let contract = self.find_row::<ContractRow>(partial).map_err(|err| match err {
            AppError::Core(tenure_core::Error::NotFound(id)) => {
                AppError::InvalidInput(format!("Contract {} does not exist", id))
            }
            other => other,
        })?;
        input.contract_id = Some(contract.id);
        Ok(input)
    }
}
