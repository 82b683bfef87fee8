//! Input document loading.
//!
//! The input is an untyped tree in JSON, YAML or TOML. It is decoded into a
//! [`serde_json::Value`] and handed to a render operation unchanged.

use std::fmt;
use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde_json::{Map, Value};

use super::ConfigError;

/// Encoding of the input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// JSON document
    Json,
    /// YAML document (also accepts JSON)
    Yaml,
    /// TOML document
    Toml,
}

impl InputFormat {
    /// Guesses the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
        };
        f.write_str(name)
    }
}

/// A decoded input document.
#[derive(Debug, Clone, PartialEq)]
pub struct InputDocument {
    /// Format the document was decoded from
    pub format: InputFormat,
    /// The untyped tree
    pub value: Value,
}

impl InputDocument {
    /// Loads a document from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path, format: InputFormat) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content, format)
    }

    /// Reads a document from a stream such as stdin.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be read or parsed.
    pub fn read(mut reader: impl Read, format: InputFormat) -> Result<Self, ConfigError> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(ConfigError::StdinRead)?;

        Self::parse(&content, format)
    }

    /// Parses a document from text. Blank text is an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is invalid in `format`.
    pub fn parse(content: &str, format: InputFormat) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self {
                format,
                value: Value::Object(Map::new()),
            });
        }

        let parsed: Result<Value, String> = match format {
            InputFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            InputFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            InputFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };

        parsed
            .map(|value| Self { format, value })
            .map_err(|reason| ConfigError::Parse { format, reason })
    }
}

/// Generates a sample input document with comments.
#[must_use]
pub fn default_input_template() -> String {
    r"# kea-render input document
#
# Fields use the daemon's names; underscores and hyphens are interchangeable
# (valid_lifetime == valid-lifetime). Unknown fields are passed through.
# Render with: kea-render -i kea-input.yaml -o kea-dhcp4.conf

# Global lease lifetime in seconds (default: 3600)
valid_lifetime: 3600

# Renew (T1) and rebind (T2) timers (defaults: 900 / 1800)
# renew_timer: 900
# rebind_timer: 1800

interfaces_config:
  interfaces: [eth0]
  # dhcp_socket_type: raw           # raw | udp
  # outbound_interface: same-as-inbound   # same-as-inbound | use-routing
  # re_detect: true

# sanity_checks:
#   lease_checks: fix-del           # none | warn | fix | fix-del | del

# lease_database:
#   type: memfile
#   lfc_interval: 3600

# control_socket:
#   socket_type: unix
#   socket_name: /tmp/kea4-ctrl-socket

option_data:
  - name: domain-name-servers
    data: 192.0.2.53
  - name: domain-name
    data: example.org

subnet4:
  - subnet: 192.0.2.0/24
    # Pools accept 'first - last', a single address, or a one- or
    # two-element list of addresses.
    pools:
      - pool: 192.0.2.100 - 192.0.2.200
    option_data:
      - name: routers
        data: 192.0.2.1
    reservations:
      - hw_address: '00:11:22:33:44:55'
        ip_address: 192.0.2.10
        hostname: printer

# loggers:
#   - name: kea-dhcp4
#     severity: INFO
#     debuglevel: 0
#     output_options:
#       - output: /var/log/kea/kea-dhcp4.log
#         maxsize: 10240000
#         maxver: 8
"
    .to_string()
}
