//! Subnets with their relays and host reservations.

use std::net::Ipv4Addr;

use ipnetwork::Ipv4Network;
use serde::Serialize;

use super::error::ValidationError;
use super::fields::{Extra, Fields, FromFields};
use super::option::{OptionData, OptionDef};
use super::pool::{Pool4, PoolCommon};

/// Client identifiers a reservation can be keyed on; exactly one is allowed.
const RESERVATION_IDENTIFIERS: &[&str] =
    &["client-id", "circuit-id", "duid", "flex-id", "hw-address"];

/// Relay agents a subnet is reachable through.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Relay4 {
    pub ip_addresses: Vec<Ipv4Addr>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl FromFields for Relay4 {
    fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        let ip_addresses = fields.ipv4_list("ip_addresses")?;
        let ip_addresses = fields.require("ip_addresses", ip_addresses)?;

        Ok(Self {
            ip_addresses,
            extra: fields.finish(),
        })
    }
}

/// A static binding of one client to an address or hostname.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Reservation4 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circuit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hw_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<Ipv4Addr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_data: Option<Vec<OptionData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_def: Option<Vec<OptionDef>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl FromFields for Reservation4 {
    fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        let reservation = Self {
            client_id: fields.string("client_id")?,
            circuit_id: fields.string("circuit_id")?,
            duid: fields.string("duid")?,
            flex_id: fields.string("flex_id")?,
            hw_address: fields.string("hw_address")?,
            hostname: fields.string("hostname")?,
            ip_address: fields.ipv4("ip_address")?,
            option_data: fields.records("option_data")?,
            option_def: fields.records("option_def")?,
            extra: Extra::new(),
        };

        let given: Vec<&'static str> = RESERVATION_IDENTIFIERS
            .iter()
            .zip([
                &reservation.client_id,
                &reservation.circuit_id,
                &reservation.duid,
                &reservation.flex_id,
                &reservation.hw_address,
            ])
            .filter(|(_, value)| value.is_some())
            .map(|(name, _)| *name)
            .collect();

        match given.len() {
            0 => Err(ValidationError::MissingIdentifier {
                path: fields.path().to_string(),
                fields: RESERVATION_IDENTIFIERS,
            }),
            1 => Ok(Self {
                extra: fields.finish(),
                ..reservation
            }),
            _ => Err(ValidationError::Conflict {
                path: fields.path().to_string(),
                fields: RESERVATION_IDENTIFIERS,
                given,
            }),
        }
    }
}

/// An address block served by the daemon (`subnet4` entry).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Subnet4 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub subnet: Ipv4Network,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authoritative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pools: Option<Vec<Pool4>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_valid_lifetime: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_lifetime: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_valid_lifetime: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renew_timer: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebind_timer: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relay: Option<Relay4>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservations: Option<Vec<Reservation4>>,
    #[serde(flatten)]
    pub common: PoolCommon,
    #[serde(flatten)]
    pub extra: Extra,
}

impl FromFields for Subnet4 {
    fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        let subnet = fields.network("subnet")?;
        let subnet = fields.require("subnet", subnet)?;

        let record = Self {
            id: fields.positive("id")?,
            subnet,
            authoritative: fields.bool("authoritative")?,
            pools: fields.records("pools")?,
            min_valid_lifetime: fields.non_negative("min_valid_lifetime")?,
            valid_lifetime: fields.non_negative("valid_lifetime")?,
            max_valid_lifetime: fields.non_negative("max_valid_lifetime")?,
            renew_timer: fields.non_negative("renew_timer")?,
            rebind_timer: fields.non_negative("rebind_timer")?,
            relay: fields.record("relay")?,
            interface: fields.string("interface")?,
            reservations: fields.records("reservations")?,
            common: PoolCommon::read(&mut fields)?,
            extra: Extra::new(),
        };

        record.warn_outside_subnet(&fields);
        Ok(Self {
            extra: fields.finish(),
            ..record
        })
    }
}

impl Subnet4 {
    /// Logs pools and reservations whose addresses fall outside the subnet.
    fn warn_outside_subnet(&self, fields: &Fields) {
        let path = fields.path();
        for (i, pool) in self.pools.iter().flatten().enumerate() {
            if !self.subnet.contains(pool.pool.first) || !self.subnet.contains(pool.pool.last) {
                tracing::warn!(
                    "{path}.pools[{i}]: pool {} is not inside subnet {}",
                    pool.pool,
                    self.subnet
                );
            }
        }

        for (i, reservation) in self.reservations.iter().flatten().enumerate() {
            if let Some(addr) = reservation.ip_address.filter(|a| !self.subnet.contains(*a)) {
                tracing::warn!(
                    "{path}.reservations[{i}]: address {addr} is not inside subnet {}",
                    self.subnet
                );
            }
        }
    }
}
