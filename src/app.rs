//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use kea_render::config::ConfigError;
use kea_render::kea::ValidationError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Input error (exit code 1) - unparsable document, failed validation, unknown filter.
    pub const INPUT_ERROR: ExitCode = ExitCode::FAILURE;

    /// I/O error (exit code 2) - unreadable input, unwritable output.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn io_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Maps an error to its exit code.
pub fn exit_code_for(error: &ConfigError) -> std::process::ExitCode {
    if error.is_input_error() {
        exit_code::INPUT_ERROR
    } else {
        exit_code::io_error()
    }
}

/// Prints helpful hints for common errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } | ConfigError::Parse { .. } => {
            eprintln!("\nRun 'kea-render init' to generate a sample input document.");
        }
        ConfigError::UnknownFilter { .. } => {
            eprintln!("\nRun 'kea-render filters' to list the render operations.");
        }
        ConfigError::Validation(
            ValidationError::OptionMismatch { .. } | ValidationError::StandardOptionRedefined { .. },
        ) => {
            eprintln!("\nRun 'kea-render options' to list the standard DHCPv4 options.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so the rendered configuration can be piped from stdout.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
