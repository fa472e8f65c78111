//! Pure formatting functions for console output.
//!
//! All display logic lives here, separated from user interaction. Fatal
//! errors and advisories go to stderr with their respective markers;
//! informational output goes to stdout and is gated by verbosity.

use crate::config::{ReleaseConfig, Verbosity};

/// Format and print a fatal error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a non-blocking warning to stderr.
pub fn display_warning(message: &str) {
    eprintln!("\x1b[33mWARNING:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Print a message if the configured verbosity includes `level`.
///
/// Debug-level lines carry a `[DEBUG]` prefix.
pub fn emit(config: &ReleaseConfig, level: Verbosity, message: &str) {
    if !config.verbosity.at_least(level) {
        return;
    }

    if level == Verbosity::Debug {
        println!("[DEBUG] {}", message);
    } else {
        println!("{}", message);
    }
}

/// Print a debug trace line (shown only at debug verbosity).
pub fn debug(config: &ReleaseConfig, message: &str) {
    emit(config, Verbosity::Debug, message);
}

/// Render the pre-confirmation release summary.
///
/// Shows the branch, the final tag, and the release name when one was
/// given. Suppressed entirely in quiet mode.
pub fn display_summary(config: &ReleaseConfig, branch: &str, tag: &str) {
    let rule = "=".repeat(50);

    emit(config, Verbosity::Normal, "");
    emit(config, Verbosity::Normal, &rule);
    emit(config, Verbosity::Normal, " Release Summary");
    emit(config, Verbosity::Normal, &rule);
    emit(config, Verbosity::Normal, &format!("  Branch:  {}", branch));
    emit(config, Verbosity::Normal, &format!("  Tag:     {}", tag));
    if let Some(name) = &config.release_name {
        emit(config, Verbosity::Normal, &format!("  Name:    {}", name));
    }
    emit(config, Verbosity::Normal, &rule);
    emit(config, Verbosity::Normal, "");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_warning() {
        // Visual verification test - output is printed to stderr
        display_warning("test warning");
    }

    #[test]
    fn test_emit_respects_quiet() {
        // Quiet config: emit must not panic and must gate silently
        let config = ReleaseConfig {
            verbosity: Verbosity::Quiet,
            ..ReleaseConfig::default()
        };
        emit(&config, Verbosity::Normal, "suppressed");
        emit(&config, Verbosity::Debug, "suppressed");
    }

    #[test]
    fn test_display_summary_with_name() {
        let config = ReleaseConfig {
            release_name: Some("Holiday".to_string()),
            ..ReleaseConfig::default()
        };
        display_summary(&config, "main", "v1.2.3");
    }
}
