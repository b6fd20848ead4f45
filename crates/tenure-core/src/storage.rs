// Rust guideline compliant 2026-10-12

//! Storage module for JSONL table files.
//!
//! Each table is one JSONL file holding one row per line. Writes go through a
//! temp file and an atomic rename; `with_lock` serializes writers across
//! processes.

use crate::models::Keyed;
use crate::{Error, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Storage engine for one table of rows of type `R`.
#[derive(Debug, Clone)]
pub struct Storage<R> {
    /// Path to the JSONL file.
    path: PathBuf,
    _row: PhantomData<R>,
}

impl<R: Keyed> Storage<R> {
    /// Creates a new Storage instance.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSONL file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self {
            path,
            _row: PhantomData,
        })
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all rows, one JSON document per line.
    ///
    /// A missing file is an empty table. Blank and malformed lines are skipped
    /// with a warning. Rows that parse but fail validation are kept and
    /// logged, so they can still be listed, repaired or deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load_all(&self) -> Result<Vec<R>> {
        let mut rows = Vec::new();
        self.scan(|row| {
            rows.push(row);
            false
        })?;
        Ok(rows)
    }

    /// Loads a single row by key, stopping at the first match.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no row has the key.
    pub fn load_by_id(&self, id: &str) -> Result<R> {
        let mut found = None;
        self.scan(|row| {
            if row.key() == id {
                found = Some(row);
                return true;
            }
            false
        })?;
        found.ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Feeds valid rows to `visit` until it returns `true`.
    fn scan<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(R) -> bool,
    {
        if !self.path.exists() {
            return Ok(());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<R>(&line) {
                Ok(row) => {
                    if let Err(err) = row.validate() {
                        warn!(
                            path = %self.path.display(),
                            line = index + 1,
                            key = row.key(),
                            error = %err,
                            "loaded row fails validation"
                        );
                    }
                    if visit(row) {
                        break;
                    }
                }
                Err(err) => {
                    warn!(
                        path = %self.path.display(),
                        line = index + 1,
                        error = %err,
                        "skipping malformed JSON line"
                    );
                }
            }
        }

        Ok(())
    }

    /// Inserts or replaces a row by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the row is invalid or the file cannot be written.
    pub fn save(&self, row: &R) -> Result<()> {
        row.validate()?;

        let mut rows = self.load_all()?;
        match rows.iter().position(|r| r.key() == row.key()) {
            Some(pos) => rows[pos] = row.clone(),
            None => rows.push(row.clone()),
        }

        self.write_rows(&rows)
    }

    /// Adds a new row, refusing to replace an existing one.
    ///
    /// Callers that race on the same key should hold [`Storage::with_lock`].
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` if a row with the key already exists, or an
    /// error if the row is invalid or the file cannot be written.
    pub fn insert(&self, row: &R) -> Result<()> {
        row.validate()?;

        let mut rows = self.load_all()?;
        if rows.iter().any(|r| r.key() == row.key()) {
            return Err(Error::DuplicateKey(row.key().to_string()));
        }
        rows.push(row.clone());

        self.write_rows(&rows)
    }

    /// Replaces the file with the given rows.
    ///
    /// Uses a temp file in the same directory and an atomic rename.
    ///
    /// # Errors
    ///
    /// Returns an error if any row is invalid or the write fails.
    pub fn save_all(&self, rows: &[R]) -> Result<()> {
        for row in rows {
            row.validate()?;
        }

        self.write_rows(rows)
    }

    /// Rewrites the file without validating rows already on disk.
    fn write_rows(&self, rows: &[R]) -> Result<()> {
        let temp_path = self.path.with_extension("jsonl.tmp");
        {
            let mut file = File::create(&temp_path)?;
            for row in rows {
                let json = serde_json::to_string(row)?;
                file.write_all(json.as_bytes())?;
                file.write_all(b"\n")?;
            }
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Appends a row to the end of the file without rewriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the row is invalid or the write fails.
    pub fn append(&self, row: &R) -> Result<()> {
        row.validate()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut json = serde_json::to_string(row)?;
        json.push('\n');
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        Ok(())
    }

    /// Deletes a row by key.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no row has the key.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut rows = self.load_all()?;
        let initial_len = rows.len();
        rows.retain(|r| r.key() != id);

        if rows.len() == initial_len {
            return Err(Error::NotFound(id.to_string()));
        }

        self.write_rows(&rows)
    }

    /// Executes a closure with an exclusive lock on the table.
    ///
    /// The lock is a sibling `.lock` file held with `fs2`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is already held or the closure fails.
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();
        let _ = lock_file.unlock();
        result
    }
}
