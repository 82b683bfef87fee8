//! Render job resolved from CLI arguments.
//!
//! All CLI-level validation (filter name, input format) happens during
//! construction; running the job reads, validates, renders and writes.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::filters::{self, Filter};

use super::ConfigError;
use super::cli::Cli;
use super::input::{InputDocument, InputFormat, default_input_template};

/// Where the input document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

/// Where the rendered configuration goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output
    Stdout,
    /// A file on disk, replaced if it exists
    File(PathBuf),
}

/// A fully resolved render invocation.
#[derive(Debug)]
pub struct RenderJob {
    /// Input document location
    pub input: InputSource,

    /// Format used to decode the input
    pub format: InputFormat,

    /// Render operation to apply
    pub filter: &'static Filter,

    /// Output location
    pub output: OutputTarget,
}

impl fmt::Display for RenderJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = match &self.input {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        };
        let output = match &self.output {
            OutputTarget::Stdout => "stdout".to_string(),
            OutputTarget::File(path) => path.display().to_string(),
        };

        write!(
            f,
            "RenderJob {{ input: {input} ({}), filter: {}, output: {output} }}",
            self.format, self.filter.name
        )
    }
}

impl RenderJob {
    /// Resolves a render job from CLI arguments.
    ///
    /// The input format is taken from `--format`, then from the input file's
    /// extension, and falls back to YAML (which also reads JSON).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFilter`] if `--filter` names no
    /// registered operation.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let filter = filters::lookup(&cli.filter).ok_or_else(|| ConfigError::UnknownFilter {
            name: cli.filter.clone(),
            available: filters::names().collect::<Vec<_>>().join(", "),
        })?;

        let format = cli
            .format
            .or_else(|| cli.input.as_deref().and_then(InputFormat::from_path))
            .unwrap_or(InputFormat::Yaml);

        let input = cli
            .input
            .clone()
            .map_or(InputSource::Stdin, InputSource::File);

        let output = cli
            .output
            .clone()
            .map_or(OutputTarget::Stdout, OutputTarget::File);

        Ok(Self {
            input,
            format,
            filter,
            output,
        })
    }

    /// Reads and decodes the input document.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or parsed.
    pub fn load_input(&self) -> Result<InputDocument, ConfigError> {
        match &self.input {
            InputSource::Stdin => InputDocument::read(std::io::stdin().lock(), self.format),
            InputSource::File(path) => InputDocument::load(path, self.format),
        }
    }

    /// Applies the render operation to a decoded document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the document is invalid.
    pub fn render(&self, document: &InputDocument) -> Result<String, ConfigError> {
        Ok((self.filter.apply)(&document.value)?)
    }

    /// Writes rendered text, followed by a newline, to the output target.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_output(&self, rendered: &str) -> Result<(), ConfigError> {
        match &self.output {
            OutputTarget::Stdout => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{rendered}")
                    .and_then(|()| stdout.flush())
                    .map_err(ConfigError::StdoutWrite)
            }
            OutputTarget::File(path) => write_file(path, &format!("{rendered}\n")),
        }
    }

    /// Reads, validates, renders and writes in one step.
    ///
    /// Nothing is written unless validation succeeds.
    ///
    /// # Errors
    ///
    /// Returns the first failure of any step.
    pub fn run(&self) -> Result<(), ConfigError> {
        let document = self.load_input()?;
        tracing::debug!("Loaded {} input document", document.format);

        let rendered = self.render(&document)?;
        self.write_output(&rendered)?;

        if let OutputTarget::File(path) = &self.output {
            tracing::info!("Configuration written to {}", path.display());
        }
        Ok(())
    }
}

/// Writes the sample input document to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_sample_input(path: &Path) -> Result<(), ConfigError> {
    write_file(path, &default_input_template())
}

fn write_file(path: &Path, content: &str) -> Result<(), ConfigError> {
    std::fs::write(path, content).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
