//! Top-level `Dhcp4` block and the configuration file that wraps it.

use serde::Serialize;

use super::ROOT_KEY;
use super::defaults;
use super::error::ValidationError;
use super::fields::{Extra, FieldPath, Fields, FromFields};
use super::logging::Logger;
use super::option::{ClientClass, OptionData, OptionDef};
use super::services::{
    ControlSocket, ExpiredLeasesProcessing, InterfacesConfig, LeaseDatabase, SanityChecks,
};
use super::subnet::Subnet4;

/// The DHCPv4 server configuration.
///
/// Blocks the daemon cannot run without (lease database, control socket,
/// expired-lease processing, loggers) and the global lifetime and timers are
/// filled with defaults when absent; everything else is emitted only when
/// given.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Dhcp4Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authoritative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interfaces_config: Option<InterfacesConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanity_checks: Option<SanityChecks>,
    pub lease_database: LeaseDatabase,
    pub control_socket: ControlSocket,
    pub expired_leases_processing: ExpiredLeasesProcessing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_valid_lifetime: Option<u32>,
    pub valid_lifetime: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_valid_lifetime: Option<u32>,
    pub renew_timer: u32,
    pub rebind_timer: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_data: Option<Vec<OptionData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_def: Option<Vec<OptionDef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_classes: Option<Vec<ClientClass>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet4: Option<Vec<Subnet4>>,
    pub loggers: Vec<Logger>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl FromFields for Dhcp4Config {
    fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        let config = Self {
            authoritative: fields.bool("authoritative")?,
            interfaces_config: fields.record("interfaces_config")?,
            sanity_checks: fields.record("sanity_checks")?,
            lease_database: fields.record("lease_database")?.unwrap_or_default(),
            control_socket: fields.record("control_socket")?.unwrap_or_default(),
            expired_leases_processing: fields
                .record("expired_leases_processing")?
                .unwrap_or_default(),
            min_valid_lifetime: fields.non_negative("min_valid_lifetime")?,
            valid_lifetime: fields
                .non_negative("valid_lifetime")?
                .unwrap_or(defaults::VALID_LIFETIME),
            max_valid_lifetime: fields.non_negative("max_valid_lifetime")?,
            renew_timer: fields
                .non_negative("renew_timer")?
                .unwrap_or(defaults::RENEW_TIMER),
            rebind_timer: fields
                .non_negative("rebind_timer")?
                .unwrap_or(defaults::REBIND_TIMER),
            option_data: fields.records("option_data")?,
            option_def: fields.records("option_def")?,
            client_classes: fields.records("client_classes")?,
            server_hostname: fields.string("server_hostname")?,
            subnet4: fields.records("subnet4")?,
            loggers: fields
                .records("loggers")?
                .unwrap_or_else(Logger::default_dhcp4),
            extra: Extra::new(),
        };

        config.warn_timer_order(fields.path());
        Ok(Self {
            extra: fields.finish(),
            ..config
        })
    }
}

impl Dhcp4Config {
    /// Logs global timers the daemon would reject or ignore.
    fn warn_timer_order(&self, path: &FieldPath) {
        if self.renew_timer >= self.rebind_timer {
            tracing::warn!(
                "{path}: renew-timer ({}) is not below rebind-timer ({})",
                self.renew_timer,
                self.rebind_timer
            );
        }
        if self.rebind_timer >= self.valid_lifetime {
            tracing::warn!(
                "{path}: rebind-timer ({}) is not below valid-lifetime ({})",
                self.rebind_timer,
                self.valid_lifetime
            );
        }
    }

    /// Number of configured subnets.
    #[must_use]
    pub fn subnet_count(&self) -> usize {
        self.subnet4.as_ref().map_or(0, Vec::len)
    }
}

/// A complete configuration file: `{ "Dhcp4": { ... } }` plus any other
/// top-level blocks, which pass through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeaConfigFile {
    #[serde(rename = "Dhcp4")]
    pub dhcp4: Dhcp4Config,
    #[serde(flatten)]
    pub extra: Extra,
}

impl KeaConfigFile {
    /// Wraps a `Dhcp4` block with no other top-level blocks.
    #[must_use]
    pub fn new(dhcp4: Dhcp4Config) -> Self {
        Self {
            dhcp4,
            extra: Extra::new(),
        }
    }

    /// Encodes the file as indented JSON with keys in lexicographic order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Encoding`] if the tree cannot be encoded.
    pub fn render(&self) -> Result<String, ValidationError> {
        // serde_json's default map is ordered by key, which sorts every level.
        let value = serde_json::to_value(self).map_err(|e| ValidationError::Encoding {
            path: ROOT_KEY.to_string(),
            reason: e.to_string(),
        })?;
        Ok(format!("{value:#}"))
    }
}

impl FromFields for KeaConfigFile {
    fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        let dhcp4 = fields.record(ROOT_KEY)?;
        let dhcp4 = fields.require(ROOT_KEY, dhcp4)?;

        Ok(Self {
            dhcp4,
            extra: fields.finish(),
        })
    }
}
