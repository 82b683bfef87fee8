//! kea-render: Kea DHCPv4 configuration renderer
//!
//! A library for validating loosely typed DHCPv4 server settings and
//! rendering them as the JSON configuration file the Kea daemon reads.

pub mod config;
pub mod filters;
pub mod kea;
