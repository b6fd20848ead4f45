// Rust guideline compliant 2026-10-12

//! Tenure CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;

pub use output::{create_formatter, Detail, Listing, OutputFormatter, Tabular};
pub use terminal::{should_use_color, status_label};
