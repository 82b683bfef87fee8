//! Catalog of standard DHCPv4 options.
//!
//! The table ships inside the binary (`data/dhcp4_options.json`) and is parsed
//! on first use, then cached for the life of the process.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Option space holding the standard DHCPv4 options.
pub const DHCP4_SPACE: &str = "dhcp4";

/// Data types accepted by an option definition's `type` field.
pub const OPTION_DATA_TYPES: &[&str] = &[
    "binary",
    "boolean",
    "empty",
    "fqdn",
    "int8",
    "int16",
    "int32",
    "ipv4-address",
    "ipv6-address",
    "ipv6-prefix",
    "psid",
    "record",
    "string",
    "tuple",
    "uint8",
    "uint16",
    "uint32",
];

const BUNDLED: &str = include_str!("../../data/dhcp4_options.json");

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::parse(BUNDLED).unwrap_or_else(|e| {
        tracing::error!("Bundled option catalog is unreadable, continuing without it: {e}");
        Catalog::default()
    })
});

/// One standard option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardOption {
    /// Option name as the daemon spells it
    pub name: String,
    /// Option code
    pub code: u16,
    /// Data type of the option payload
    #[serde(rename = "type")]
    pub data_type: String,
    /// Whether the payload is a list of `data_type`
    pub array: bool,
}

/// Indexed table of standard options.
#[derive(Debug, Default)]
pub struct Catalog {
    options: Vec<StandardOption>,
    by_name: HashMap<String, usize>,
    by_code: HashMap<u16, usize>,
}

impl Catalog {
    /// Parses a catalog from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns the parser error if `json` is not a list of options.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let options: Vec<StandardOption> = serde_json::from_str(json)?;
        let by_name = options
            .iter()
            .enumerate()
            .map(|(i, o)| (o.name.clone(), i))
            .collect();
        let by_code = options.iter().enumerate().map(|(i, o)| (o.code, i)).collect();

        Ok(Self {
            options,
            by_name,
            by_code,
        })
    }

    /// Finds an option by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&StandardOption> {
        self.by_name.get(name).map(|&i| &self.options[i])
    }

    /// Finds an option by code.
    #[must_use]
    pub fn by_code(&self, code: u16) -> Option<&StandardOption> {
        self.by_code.get(&code).map(|&i| &self.options[i])
    }

    /// Finds an option by name, or by code when `query` is numeric.
    #[must_use]
    pub fn lookup(&self, query: &str) -> Option<&StandardOption> {
        let query = query.trim();
        query
            .parse::<u16>()
            .ok()
            .map_or_else(|| self.by_name(query), |code| self.by_code(code))
    }

    /// All options in code order.
    pub fn iter(&self) -> impl Iterator<Item = &StandardOption> {
        self.options.iter()
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if the catalog holds no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// The process-wide catalog of standard DHCPv4 options.
#[must_use]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Returns true if `space` names the standard option space (unset means standard).
#[must_use]
pub fn is_standard_space(space: Option<&str>) -> bool {
    space.is_none_or(|s| s == DHCP4_SPACE)
}
