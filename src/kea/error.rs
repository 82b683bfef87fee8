//! Error type for configuration model validation.

use thiserror::Error;

/// Error raised while building the configuration tree from raw input.
///
/// Every variant carries the path of the offending field, spelled with the
/// daemon's hyphenated names (for example `Dhcp4.subnet4[0].pools[1].pool`).
/// Construction stops at the first error; no partially validated tree is
/// ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A record was expected but the value is not a mapping.
    #[error("{path}: expected a mapping, got {found}")]
    NotAnObject {
        /// Field path
        path: String,
        /// JSON type name of the value found
        found: &'static str,
    },

    /// The value cannot be coerced to the declared type.
    #[error("{path}: expected {expected}, got {found}")]
    TypeMismatch {
        /// Field path
        path: String,
        /// Declared type
        expected: &'static str,
        /// Description of the value found
        found: String,
    },

    /// A required field is absent.
    #[error("{path}: field required")]
    MissingField {
        /// Field path
        path: String,
    },

    /// An integer falls outside its permitted range.
    #[error("{path}: {value} is out of range ({rule})")]
    OutOfRange {
        /// Field path
        path: String,
        /// The offending value as given
        value: String,
        /// The violated bound
        rule: &'static str,
    },

    /// Not a valid IPv4 address.
    #[error("{path}: '{value}' is not a valid IPv4 address")]
    InvalidAddress {
        /// Field path
        path: String,
        /// The offending value
        value: String,
    },

    /// Not a valid IPv4 network.
    #[error("{path}: '{value}' is not a valid IPv4 network: {reason}")]
    InvalidNetwork {
        /// Field path
        path: String,
        /// The offending value
        value: String,
        /// Why parsing failed
        reason: String,
    },

    /// A string outside its enumerated set.
    #[error("{path}: '{value}' is not one of: {}", allowed.join(", "))]
    InvalidChoice {
        /// Field path
        path: String,
        /// The offending value
        value: String,
        /// Permitted values
        allowed: &'static [&'static str],
    },

    /// None of a set of identifying fields was given.
    #[error("{path}: one of {} must be set", fields.join(", "))]
    MissingIdentifier {
        /// Record path
        path: String,
        /// The identifying fields
        fields: &'static [&'static str],
    },

    /// Mutually exclusive fields were given together.
    #[error("{path}: only one of {} may be set, got {}", fields.join(", "), given.join(", "))]
    Conflict {
        /// Record path
        path: String,
        /// The exclusive fields
        fields: &'static [&'static str],
        /// Which of them were given
        given: Vec<&'static str>,
    },

    /// A pool range that does not normalize to two addresses.
    #[error("{path}: {reason}")]
    InvalidPool {
        /// Field path
        path: String,
        /// Violated rule
        reason: String,
    },

    /// The same field was given in both its hyphenated and underscored spelling.
    #[error("{path}: given twice, as '{internal}' and as '{external}'")]
    DuplicateField {
        /// Field path
        path: String,
        /// Underscored spelling
        internal: String,
        /// Hyphenated spelling
        external: String,
    },

    /// An option's name and code point at different standard options.
    #[error("{path}: option '{name}' has standard code {expected}, not {code}")]
    OptionMismatch {
        /// Record path
        path: String,
        /// Option name given
        name: String,
        /// Option code given
        code: u16,
        /// Code the catalog assigns to `name`
        expected: u16,
    },

    /// A custom definition reuses a standard DHCPv4 option code.
    #[error("{path}: code {code} is the standard option '{standard}' and cannot be redefined")]
    StandardOptionRedefined {
        /// Record path
        path: String,
        /// Code being redefined
        code: u16,
        /// Name of the standard option
        standard: &'static str,
    },

    /// The validated tree could not be encoded as JSON.
    #[error("{path}: failed to encode configuration: {reason}")]
    Encoding {
        /// Root path
        path: String,
        /// Encoder message
        reason: String,
    },
}

impl ValidationError {
    /// Returns the path of the field or record that failed validation.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::NotAnObject { path, .. }
            | Self::TypeMismatch { path, .. }
            | Self::MissingField { path }
            | Self::OutOfRange { path, .. }
            | Self::InvalidAddress { path, .. }
            | Self::InvalidNetwork { path, .. }
            | Self::InvalidChoice { path, .. }
            | Self::MissingIdentifier { path, .. }
            | Self::Conflict { path, .. }
            | Self::InvalidPool { path, .. }
            | Self::DuplicateField { path, .. }
            | Self::OptionMismatch { path, .. }
            | Self::StandardOptionRedefined { path, .. }
            | Self::Encoding { path, .. } => path,
        }
    }
}
