//! Logger configuration of the daemon.

use serde::Serialize;

use super::defaults;
use super::error::ValidationError;
use super::fields::{Extra, Fields, FromFields};

/// One log destination of a logger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggerOutput {
    /// Path to the log file (or `stdout`, `stderr`, `syslog`)
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Flush to disk after every write
    pub flush: bool,
    /// Rotate once the file reaches this many bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxsize: Option<u32>,
    /// Number of rotated files to keep
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxver: Option<u32>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl LoggerOutput {
    /// Output to `path` with every optional setting at its default.
    #[must_use]
    pub fn to_file(path: &str) -> Self {
        Self {
            output: path.to_string(),
            pattern: None,
            flush: defaults::LOGGER_FLUSH,
            maxsize: None,
            maxver: None,
            extra: Extra::new(),
        }
    }
}

impl FromFields for LoggerOutput {
    fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        let output = fields.string("output")?;
        let output = fields.require("output", output)?;

        Ok(Self {
            output,
            pattern: fields.string("pattern")?,
            flush: fields.bool("flush")?.unwrap_or(defaults::LOGGER_FLUSH),
            maxsize: fields.positive("maxsize")?,
            maxver: fields.positive("maxver")?,
            extra: fields.finish(),
        })
    }
}

/// A named logger (`loggers` entry).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Logger {
    pub name: String,
    #[serde(rename = "output_options")]
    pub output_options: Vec<LoggerOutput>,
    pub severity: String,
    pub debuglevel: u32,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Logger {
    /// The logger list used when none is configured: the daemon's own logger
    /// writing to its standard log file at INFO.
    #[must_use]
    pub fn default_dhcp4() -> Vec<Self> {
        vec![Self {
            name: defaults::LOGGER_NAME.to_string(),
            output_options: vec![LoggerOutput::to_file(defaults::LOGGER_OUTPUT)],
            severity: defaults::LOGGER_SEVERITY.to_string(),
            debuglevel: defaults::LOGGER_DEBUGLEVEL,
            extra: Extra::new(),
        }]
    }
}

impl FromFields for Logger {
    fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        let name = fields.string("name")?;
        let name = fields.require("name", name)?;
        let output_options = fields.records("output_options")?;
        let output_options = fields.require("output_options", output_options)?;
        let severity = fields.string("severity")?;
        let severity = fields.require("severity", severity)?;

        Ok(Self {
            name,
            output_options,
            severity,
            debuglevel: fields
                .non_negative("debuglevel")?
                .unwrap_or(defaults::LOGGER_DEBUGLEVEL),
            extra: fields.finish(),
        })
    }
}
