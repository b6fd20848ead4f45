// Rust guideline compliant 2026-10-12

//! Diagnostic logging setup for the CLI.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use anyhow::{Context, Result};
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the default log filter.
pub const LOG_ENV: &str = "TENURE_LOG";

/// Default filter when neither a flag nor the environment sets one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Picks the log filter: flag first, then `TENURE_LOG`, then the default.
pub fn resolve_filter(flag: Option<&str>, env: Option<String>) -> String {
    flag.map(str::to_string)
        .or(env)
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Installs the global tracing subscriber.
///
/// # Arguments
///
/// * `filter` - Level or `EnvFilter` directive, e.g. `debug` or `tenure_app=info`
/// * `json` - Emit one JSON object per event instead of text
///
/// # Errors
///
/// Returns an error if the filter directive is invalid.
pub fn init_tracing(filter: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("Invalid log filter: {}", filter))?;

    if json {
        let subscriber = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(());
    }

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}
