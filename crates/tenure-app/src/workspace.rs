// Rust guideline compliant 2026-10-12

//! Workspace discovery and path management utilities.

use crate::backend::JsonlBackend;
use crate::error::{AppError, Result};
use crate::service::RecordService;
use std::fs;
use std::path::{Path, PathBuf};
use tenure_core::{Config, Table};
use tracing::info;

/// Name of the data directory inside a workspace root.
pub const DATA_DIR: &str = ".tenure";

/// Path metadata for a Tenure workspace.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    dir: PathBuf,
    config_path: PathBuf,
}

impl Workspace {
    fn at(root: PathBuf) -> Self {
        let dir = root.join(DATA_DIR);
        Self {
            config_path: dir.join("config.toml"),
            root,
            dir,
        }
    }

    fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
        match root {
            Some(root) => Ok(root.to_path_buf()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Discovers a workspace starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `root` - Optional workspace root; defaults to the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.tenure` directory is missing
    pub fn discover(root: Option<&Path>) -> Result<Self> {
        let workspace = Self::at(Self::resolve_root(root)?);
        if !workspace.dir.is_dir() {
            return Err(AppError::WorkspaceNotInitialized {
                path: workspace.dir,
            });
        }
        Ok(workspace)
    }

    /// Creates the data directory, empty tables and a default config.
    ///
    /// Existing files are left untouched, so running this twice is safe.
    ///
    /// # Errors
    ///
    /// Returns an error if any file cannot be created.
    pub fn init(root: Option<&Path>) -> Result<Self> {
        let workspace = Self::at(Self::resolve_root(root)?);
        fs::create_dir_all(&workspace.dir)?;

        for table in [Table::Contracts, Table::Minutes, Table::Amendments, Table::Audit] {
            let path = workspace.dir.join(table.file_name());
            if !path.exists() {
                fs::write(&path, "")?;
            }
        }

        if !workspace.config_path.exists() {
            Config::default().save(&workspace.dir)?;
        }

        info!(path = %workspace.dir.display(), "workspace initialized");
        Ok(workspace)
    }

    /// Returns the workspace root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.tenure` directory path.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Loads workspace configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.dir())?)
    }

    /// Opens the JSONL backend over the data directory.
    #[must_use]
    pub fn backend(&self) -> JsonlBackend {
        JsonlBackend::new(self.dir.clone())
    }

    /// Opens a record service with the workspace backend and config.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn service(&self) -> Result<RecordService<JsonlBackend>> {
        Ok(RecordService::new(self.backend(), self.load_config()?))
    }
}
