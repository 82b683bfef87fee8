//! Default values for command-line options.
//!
//! Centralized constants to avoid magic strings scattered across the CLI layer.

/// Render operation used when `--filter` is not given.
pub const FILTER: &str = "get_kea4_config";

/// Output path of the `init` subcommand.
pub const INIT_OUTPUT: &str = "kea-input.yaml";
