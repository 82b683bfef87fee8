//! Error types for input loading, rendering and output.

use std::path::PathBuf;

use thiserror::Error;

use crate::kea::ValidationError;

use super::InputFormat;

/// Error type for a render run.
///
/// Covers reading and parsing the input document, validating it, and writing
/// the rendered configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the input file.
    #[error("Failed to read input file '{}': {source}", path.display())]
    FileRead {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the input document from standard input.
    #[error("Failed to read input from stdin: {0}")]
    StdinRead(#[source] std::io::Error),

    /// Failed to write an output file.
    #[error("Failed to write file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to standard output.
    #[error("Failed to write to stdout: {0}")]
    StdoutWrite(#[source] std::io::Error),

    /// The input document is not valid in its format.
    #[error("Failed to parse {format} input: {reason}")]
    Parse {
        /// Format the input was parsed as
        format: InputFormat,
        /// Parser message
        reason: String,
    },

    /// No render operation is registered under the requested name.
    #[error("Unknown filter '{name}'. Available: {available}")]
    UnknownFilter {
        /// The requested name
        name: String,
        /// Comma-separated registered names
        available: String,
    },

    /// The input document failed validation.
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),
}

impl ConfigError {
    /// Returns true for failures caused by the input rather than by I/O.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::UnknownFilter { .. } | Self::Validation(_)
        )
    }
}
