// Rust guideline compliant 2026-10-12

//! Command implementations for the Tenure CLI.

pub mod audit;
pub mod date;
pub mod init;
pub mod records;
pub mod status;

use crate::OutputFormatter;
use std::path::PathBuf;
use tenure_app::{JsonlBackend, RecordService, Result, Workspace};

/// Shared state handed to every command.
pub struct Context {
    /// Workspace root override; the current directory when unset.
    pub root: Option<PathBuf>,
    /// Formatter for command results.
    pub formatter: Box<dyn OutputFormatter>,
}

impl Context {
    /// Creates a command context.
    pub fn new(root: Option<PathBuf>, formatter: Box<dyn OutputFormatter>) -> Self {
        Self { root, formatter }
    }

    /// Discovers the workspace.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceNotInitialized` if there is no `.tenure` directory.
    pub fn workspace(&self) -> Result<Workspace> {
        Workspace::discover(self.root.as_deref())
    }

    /// Opens the record service for the workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the workspace or its configuration cannot be
    /// loaded.
    pub fn service(&self) -> Result<RecordService<JsonlBackend>> {
        self.workspace()?.service()
    }

    /// Prints formatted output to stdout.
    pub fn emit(&self, output: &str) {
        println!("{}", output.trim_end_matches('\n'));
    }
}
