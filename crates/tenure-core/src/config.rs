// Rust guideline compliant 2026-10-12

//! Configuration management for Tenure.

use crate::status::DEFAULT_WARNING_DAYS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound for the warning window.
pub const MAX_WARNING_DAYS: u32 = 365;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl OutputFormat {
    /// Returns the snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
            OutputFormat::Plain => "plain",
        }
    }
}

/// Configuration for Tenure behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Days before the end date at which a record turns to warning.
    #[serde(default = "default_warning_days")]
    pub warning_days: u32,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Name recorded as the author of audit entries.
    #[serde(default = "default_actor")]
    pub actor: String,

    /// Whether writes are recorded in the audit log.
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_warning_days() -> u32 {
    DEFAULT_WARNING_DAYS
}

fn default_actor() -> String {
    "admin".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            warning_days: default_warning_days(),
            output_format: OutputFormat::default(),
            actor: default_actor(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/config.toml`
    /// 3. Environment variables with `TENURE_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Path to the `.tenure` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_with(dir, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with a custom environment lookup.
    pub fn load_with<F>(dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let config_path = dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment overrides.
    ///
    /// Supported variables:
    /// - `TENURE_WARNING_DAYS` - Warning window in days
    /// - `TENURE_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `TENURE_ACTOR` - Audit actor name
    /// - `TENURE_AUDIT_ENABLED` - Whether to write audit entries (true/false)
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("TENURE_WARNING_DAYS") {
            self.warning_days = val.trim().parse().map_err(|_| {
                Error::InvalidConfig("TENURE_WARNING_DAYS must be a non-negative number".to_string())
            })?;
        }

        if let Some(val) = lookup("TENURE_OUTPUT_FORMAT") {
            self.output_format = match val.trim().to_lowercase().as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "TENURE_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Some(val) = lookup("TENURE_ACTOR") {
            self.actor = val.trim().to_string();
        }

        if let Some(val) = lookup("TENURE_AUDIT_ENABLED") {
            self.audit_enabled = val.trim().parse().map_err(|_| {
                Error::InvalidConfig("TENURE_AUDIT_ENABLED must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.warning_days > MAX_WARNING_DAYS {
            return Err(Error::InvalidConfig(format!(
                "warning_days must be at most {}, got {}",
                MAX_WARNING_DAYS, self.warning_days
            )));
        }

        if self.actor.trim().is_empty() {
            return Err(Error::InvalidConfig("actor cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Saves configuration to `<dir>/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(dir.join("config.toml"), content)?;
        Ok(())
    }
}
