//! Configuration model and validator for the Kea DHCPv4 server.
//!
//! The model is a tree of typed records mirroring the daemon's configuration
//! grammar. Records are built bottom-up from an untyped document (option data
//! first, then pools and classes, then subnets, then the `Dhcp4` block). Each
//! record:
//!
//! 1. reads its known fields under either spelling (`renew_timer` or
//!    `renew-timer`), coercing loosely typed values,
//! 2. checks per-field constraints and trims strings,
//! 3. checks cross-field rules (option identity, pool arity, reservation
//!    identifiers),
//! 4. fills defaults for anything left unset,
//! 5. keeps unknown fields so they reach the output unchanged.
//!
//! The first violation aborts construction with a [`ValidationError`].
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let rendered = kea_render::kea::get_kea4_config(&json!({
//!     "subnet4": [{"subnet": "10.0.0.0/24", "pools": [{"pool": "10.0.0.10-10.0.0.100"}]}]
//! }))
//! .unwrap();
//!
//! assert!(rendered.contains(r#""pool": "10.0.0.10 - 10.0.0.100""#));
//! ```

pub mod alias;
pub mod catalog;
pub mod defaults;
mod dhcp4;
mod error;
mod fields;
mod logging;
mod net;
mod option;
mod pool;
mod services;
mod subnet;

#[cfg(test)]
mod option_tests;
#[cfg(test)]
mod subnet_tests;

use serde_json::Value;

pub use dhcp4::{Dhcp4Config, KeaConfigFile};
pub use error::ValidationError;
pub use fields::{Extra, FieldPath, Fields, FromFields};
pub use logging::{Logger, LoggerOutput};
pub use net::parse_subnet;
pub use option::{ClientClass, OptionData, OptionDef};
pub use pool::{Pool4, PoolCommon, PoolRange};
pub use services::{
    ControlSocket, ExpiredLeasesProcessing, InterfacesConfig, LeaseDatabase, SanityChecks,
};
pub use subnet::{Relay4, Reservation4, Subnet4};

/// Top-level key of the daemon's configuration file.
pub const ROOT_KEY: &str = "Dhcp4";

/// Validates the inner fields of a `Dhcp4` block and renders the complete
/// configuration file.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found in `data`.
pub fn get_kea4_config(data: &Value) -> Result<String, ValidationError> {
    let dhcp4 = Dhcp4Config::from_value(data, FieldPath::root(ROOT_KEY))?;
    render(&KeaConfigFile::new(dhcp4))
}

/// Validates a document already shaped as `{ "Dhcp4": { ... } }` and renders it.
///
/// Other top-level keys are passed through unchanged.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found in `document`.
pub fn render_kea4_file(document: &Value) -> Result<String, ValidationError> {
    let file = KeaConfigFile::from_value(document, FieldPath::root(""))?;
    render(&file)
}

fn render(file: &KeaConfigFile) -> Result<String, ValidationError> {
    tracing::debug!(
        "Validated {ROOT_KEY} configuration with {} subnet(s)",
        file.dhcp4.subnet_count()
    );
    file.render()
}
