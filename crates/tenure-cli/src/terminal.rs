// Rust guideline compliant 2026-10-12

//! Terminal UI utilities for the Tenure CLI.
//!
//! This module provides color support and colored status messages.

use std::env;
use std::io::Write;
use tenure_core::Status;
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Returns the display color for a status.
pub fn status_color(status: Status) -> Color {
    match status {
        Status::Active => Color::Green,
        Status::Warning => Color::Yellow,
        Status::Expired => Color::Red,
        Status::Executed => Color::Blue,
        Status::Rescinded => Color::Magenta,
    }
}

/// Wraps `text` in ANSI color codes.
///
/// # Arguments
/// * `text` - The text to color
/// * `color` - The color to use
/// * `bold` - Whether to use bold text
pub fn paint(text: &str, color: Color, bold: bool) -> String {
    let mut buffer = Buffer::ansi();
    let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
    let _ = write!(buffer, "{}", text);
    let _ = buffer.reset();
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}

/// Renders a status label, colored when `use_color` is set.
pub fn status_label(status: Status, use_color: bool) -> String {
    if use_color {
        paint(status.as_str(), status_color(status), status != Status::Active)
    } else {
        status.as_str().to_string()
    }
}

fn print_status(prefix: &str, prefix_color: Color, message: &str) {
    let choice = if should_use_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {}", message);
}

/// Prints a success message to stderr.
pub fn print_success(message: &str) {
    print_status("✓", Color::Green, message);
}

/// Prints a warning message to stderr.
pub fn print_warning(message: &str) {
    print_status("⚠", Color::Yellow, message);
}

/// Prints an error message to stderr.
pub fn print_error(message: &str) {
    print_status("✗", Color::Red, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_wraps_text_in_escape_codes() {
        let painted = paint("expired", Color::Red, true);
        assert!(painted.contains("expired"));
        assert!(painted.starts_with("\u{1b}["));
        assert!(painted.ends_with("\u{1b}[0m"));
    }

    #[test]
    fn test_status_label_without_color_is_plain() {
        assert_eq!(status_label(Status::Warning, false), "warning");
        assert_ne!(status_label(Status::Warning, true), "warning");
    }

    #[test]
    fn test_every_status_has_a_color() {
        for status in Status::ALL {
            let _ = status_color(status);
        }
    }
}
