//! Registry of named render operations.
//!
//! Host automation tools call operations by name; this table is the complete
//! list. Each entry takes the raw input document and returns the rendered
//! configuration text.
//!
//! # Examples
//!
//! ```
//! use kea_render::filters;
//! use serde_json::json;
//!
//! let filter = filters::lookup("get_kea4_config").unwrap();
//! let rendered = (filter.apply)(&json!({})).unwrap();
//! assert!(rendered.contains("\"Dhcp4\""));
//! ```

use serde_json::Value;

use crate::kea::{self, ValidationError};

/// Signature shared by every render operation.
pub type FilterFn = fn(&Value) -> Result<String, ValidationError>;

/// One named render operation.
#[derive(Debug, Clone, Copy)]
pub struct Filter {
    /// Name the operation is invoked by
    pub name: &'static str,
    /// One-line description of the expected input
    pub summary: &'static str,
    /// The operation itself
    pub apply: FilterFn,
}

/// Every registered operation.
pub static FILTERS: &[Filter] = &[
    Filter {
        name: "get_kea4_config",
        summary: "Render a Kea DHCPv4 config file from the inner fields of its Dhcp4 block",
        apply: kea::get_kea4_config,
    },
    Filter {
        name: "render_kea4_file",
        summary: "Validate and render a document already shaped as {\"Dhcp4\": {...}}",
        apply: kea::render_kea4_file,
    },
];

/// Finds an operation by name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Filter> {
    FILTERS.iter().find(|f| f.name == name)
}

/// Names of all registered operations.
pub fn names() -> impl Iterator<Item = &'static str> {
    FILTERS.iter().map(|f| f.name)
}
