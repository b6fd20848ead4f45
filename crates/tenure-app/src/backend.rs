// Rust guideline compliant 2026-10-12

//! Persistence backend handed to the record service.
//!
//! The service never reaches for a global client; callers construct a
//! [`Backend`] and pass it in.

use crate::error::Result;
use std::path::{Path, PathBuf};
use tenure_core::{AuditEntry, Keyed, Row, Storage, Table};

/// Table-oriented persistence used by [`crate::RecordService`].
pub trait Backend {
    /// Loads every row of the record kind `R`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    fn load<R: Row>(&self) -> Result<Vec<R>>;

    /// Inserts or replaces a row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row is invalid or cannot be written.
    fn save<R: Row>(&self, row: &R) -> Result<()>;

    /// Inserts a new row atomically.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` if a row with the same ID already exists.
    fn insert<R: Row>(&self, row: &R) -> Result<()>;

    /// Deletes a row by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the row does not exist.
    fn delete<R: Row>(&self, id: &str) -> Result<()>;

    /// Appends an entry to the audit log.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be written.
    fn append_audit(&self, entry: &AuditEntry) -> Result<()>;

    /// Loads the audit log in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read.
    fn load_audit(&self) -> Result<Vec<AuditEntry>>;
}

impl<B: Backend> Backend for &B {
    fn load<R: Row>(&self) -> Result<Vec<R>> {
        (**self).load::<R>()
    }

    fn save<R: Row>(&self, row: &R) -> Result<()> {
        (**self).save(row)
    }

    fn insert<R: Row>(&self, row: &R) -> Result<()> {
        (**self).insert(row)
    }

    fn delete<R: Row>(&self, id: &str) -> Result<()> {
        (**self).delete::<R>(id)
    }

    fn append_audit(&self, entry: &AuditEntry) -> Result<()> {
        (**self).append_audit(entry)
    }

    fn load_audit(&self) -> Result<Vec<AuditEntry>> {
        (**self).load_audit()
    }
}

/// Backend storing each table as a JSONL file in one directory.
#[derive(Debug, Clone)]
pub struct JsonlBackend {
    dir: PathBuf,
}

impl JsonlBackend {
    /// Creates a backend rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the data directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn storage<K: Keyed>(&self, table: Table) -> Result<Storage<K>> {
        Ok(Storage::new(self.dir.join(table.file_name()))?)
    }
}

impl Backend for JsonlBackend {
    fn load<R: Row>(&self) -> Result<Vec<R>> {
        Ok(self.storage::<R>(R::TABLE)?.load_all()?)
    }

    fn save<R: Row>(&self, row: &R) -> Result<()> {
        let storage = self.storage::<R>(R::TABLE)?;
        storage.with_lock(|| storage.save(row))?;
        Ok(())
    }

    fn insert<R: Row>(&self, row: &R) -> Result<()> {
        let storage = self.storage::<R>(R::TABLE)?;
        storage.with_lock(|| storage.insert(row))?;
        Ok(())
    }

    fn delete<R: Row>(&self, id: &str) -> Result<()> {
        let storage = self.storage::<R>(R::TABLE)?;
        storage.with_lock(|| storage.delete(id))?;
        Ok(())
    }

    fn append_audit(&self, entry: &AuditEntry) -> Result<()> {
        let storage = self.storage::<AuditEntry>(Table::Audit)?;
        storage.with_lock(|| storage.append(entry))?;
        Ok(())
    }

    fn load_audit(&self) -> Result<Vec<AuditEntry>> {
        Ok(self.storage::<AuditEntry>(Table::Audit)?.load_all()?)
    }
}
