//! Daemon-wide service blocks: control socket, lease storage and reclaim
//! tuning, interface selection and lease sanity checking.

use serde::Serialize;

use super::defaults;
use super::error::ValidationError;
use super::fields::{Extra, Fields, FromFields};

const SOCKET_TYPES: &[&str] = &["unix"];
const DHCP_SOCKET_TYPES: &[&str] = &["raw", "udp"];
const OUTBOUND_INTERFACES: &[&str] = &["use-routing", "same-as-inbound"];
const LEASE_CHECKS: &[&str] = &["none", "warn", "fix", "fix-del", "del"];

/// Administrative channel of the daemon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ControlSocket {
    pub socket_type: String,
    pub socket_name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Default for ControlSocket {
    fn default() -> Self {
        Self {
            socket_type: defaults::CONTROL_SOCKET_TYPE.to_string(),
            socket_name: defaults::CONTROL_SOCKET_NAME.to_string(),
            extra: Extra::new(),
        }
    }
}

impl FromFields for ControlSocket {
    fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        let socket_type = fields
            .choice("socket_type", SOCKET_TYPES)?
            .unwrap_or_else(|| defaults::CONTROL_SOCKET_TYPE.to_string());
        let socket_name = fields.string("socket_name")?;
        let socket_name = fields.require("socket_name", socket_name)?;

        Ok(Self {
            socket_type,
            socket_name,
            extra: fields.finish(),
        })
    }
}

/// Lease storage backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LeaseDatabase {
    #[serde(rename = "type")]
    pub backend: String,
    pub lfc_interval: u32,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Default for LeaseDatabase {
    fn default() -> Self {
        Self {
            backend: defaults::LEASE_DATABASE_TYPE.to_string(),
            lfc_interval: defaults::LFC_INTERVAL,
            extra: Extra::new(),
        }
    }
}

impl FromFields for LeaseDatabase {
    fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        Ok(Self {
            backend: fields
                .string("type")?
                .unwrap_or_else(|| defaults::LEASE_DATABASE_TYPE.to_string()),
            lfc_interval: fields
                .non_negative("lfc_interval")?
                .unwrap_or(defaults::LFC_INTERVAL),
            extra: fields.finish(),
        })
    }
}

/// Tuning of expired lease reclamation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExpiredLeasesProcessing {
    pub reclaim_timer_wait_time: u32,
    pub flush_reclaimed_timer_wait_time: u32,
    pub hold_reclaimed_time: u32,
    pub max_reclaim_leases: u32,
    pub max_reclaim_time: u32,
    pub unwarned_reclaim_cycles: u32,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Default for ExpiredLeasesProcessing {
    fn default() -> Self {
        Self {
            reclaim_timer_wait_time: defaults::RECLAIM_TIMER_WAIT_TIME,
            flush_reclaimed_timer_wait_time: defaults::FLUSH_RECLAIMED_TIMER_WAIT_TIME,
            hold_reclaimed_time: defaults::HOLD_RECLAIMED_TIME,
            max_reclaim_leases: defaults::MAX_RECLAIM_LEASES,
            max_reclaim_time: defaults::MAX_RECLAIM_TIME,
            unwarned_reclaim_cycles: defaults::UNWARNED_RECLAIM_CYCLES,
            extra: Extra::new(),
        }
    }
}

impl FromFields for ExpiredLeasesProcessing {
    fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        let mut timer = |field: &str, default: u32| -> Result<u32, ValidationError> {
            Ok(fields.non_negative(field)?.unwrap_or(default))
        };

        let reclaim_timer_wait_time =
            timer("reclaim_timer_wait_time", defaults::RECLAIM_TIMER_WAIT_TIME)?;
        let flush_reclaimed_timer_wait_time = timer(
            "flush_reclaimed_timer_wait_time",
            defaults::FLUSH_RECLAIMED_TIMER_WAIT_TIME,
        )?;
        let hold_reclaimed_time = timer("hold_reclaimed_time", defaults::HOLD_RECLAIMED_TIME)?;
        let max_reclaim_leases = timer("max_reclaim_leases", defaults::MAX_RECLAIM_LEASES)?;
        let max_reclaim_time = timer("max_reclaim_time", defaults::MAX_RECLAIM_TIME)?;
        let unwarned_reclaim_cycles =
            timer("unwarned_reclaim_cycles", defaults::UNWARNED_RECLAIM_CYCLES)?;

        Ok(Self {
            reclaim_timer_wait_time,
            flush_reclaimed_timer_wait_time,
            hold_reclaimed_time,
            max_reclaim_leases,
            max_reclaim_time,
            unwarned_reclaim_cycles,
            extra: fields.finish(),
        })
    }
}

/// Interfaces the daemon listens on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct InterfacesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp_socket_type: Option<String>,
    pub outbound_interface: String,
    pub re_detect: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

impl FromFields for InterfacesConfig {
    fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        Ok(Self {
            interfaces: fields.string_list("interfaces")?,
            dhcp_socket_type: fields.choice("dhcp_socket_type", DHCP_SOCKET_TYPES)?,
            outbound_interface: fields
                .choice("outbound_interface", OUTBOUND_INTERFACES)?
                .unwrap_or_else(|| defaults::OUTBOUND_INTERFACE.to_string()),
            re_detect: fields.bool("re_detect")?.unwrap_or(defaults::RE_DETECT),
            extra: fields.finish(),
        })
    }
}

/// Strictness applied by the daemon to lease data it loads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SanityChecks {
    pub lease_checks: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl FromFields for SanityChecks {
    fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        Ok(Self {
            lease_checks: fields
                .choice("lease_checks", LEASE_CHECKS)?
                .unwrap_or_else(|| defaults::LEASE_CHECKS.to_string()),
            extra: fields.finish(),
        })
    }
}
