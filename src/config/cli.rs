//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;
use super::input::InputFormat;

/// kea-render: Kea DHCPv4 configuration renderer
///
/// Validates a loosely typed input document against the Kea DHCPv4
/// configuration grammar, fills defaults, and writes canonical JSON.
#[derive(Debug, Parser)]
#[command(name = "kea-render")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run (defaults to `render`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Input document (reads stdin when omitted)
    #[arg(long, short, global = true)]
    pub input: Option<PathBuf>,

    /// Input format (inferred from the file extension, otherwise YAML)
    #[arg(long, short, value_enum, global = true)]
    pub format: Option<InputFormat>,

    /// Write the rendered configuration here instead of stdout
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,

    /// Render operation to apply
    #[arg(long, value_name = "NAME", default_value = defaults::FILTER, global = true)]
    pub filter: String,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for kea-render
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the input and render the configuration
    Render,

    /// Generate a sample input document
    Init {
        /// Output path for the sample document
        #[arg(long = "to", default_value = defaults::INIT_OUTPUT)]
        to: PathBuf,
    },

    /// List the registered render operations
    Filters,

    /// Look up standard DHCPv4 options by name or code
    Options {
        /// Option name or code; lists every option when omitted
        query: Option<String>,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
