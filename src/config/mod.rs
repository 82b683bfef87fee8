//! Command-line layer for kea-render.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Input document decoding ([`InputDocument`], [`InputFormat`])
//! - Resolved render jobs ([`RenderJob`])
//! - Sample input generation ([`write_sample_input`])
//! - Default values ([`defaults`])
//!
//! # Input format resolution
//!
//! The input format is resolved with the following priority (highest to lowest):
//!
//! 1. **`--format`** - Explicitly requested format
//! 2. **File extension** - `.json`, `.yaml`/`.yml`, `.toml`
//! 3. **YAML** - Which also reads JSON, so stdin works for both
//!
//! # Output
//!
//! The rendered configuration goes to stdout unless `--output` names a file.
//! Logs always go to stderr so that stdout can be redirected straight into
//! the daemon's configuration file. Nothing is written when validation fails.

mod cli;
pub mod defaults;
mod error;
mod input;
mod job;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use input::{InputDocument, InputFormat, default_input_template};
pub use job::{InputSource, OutputTarget, RenderJob, write_sample_input};
