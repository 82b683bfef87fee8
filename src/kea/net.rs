//! IPv4 subnet parsing.

use std::net::Ipv4Addr;

use ipnetwork::{Ipv4Network, ipv4_mask_to_prefix};

/// Parses a subnet in prefix (`10.0.0.0/24`) or netmask
/// (`10.0.0.0/255.255.255.0`) notation.
///
/// A bare address is a `/32` network. Host bits must be zero. The result
/// always displays in prefix notation.
///
/// # Errors
///
/// Returns a description of what is wrong with `text`.
///
/// # Examples
///
/// ```
/// use kea_render::kea::parse_subnet;
///
/// let net = parse_subnet("10.0.0.0/255.255.255.0").unwrap();
/// assert_eq!(net.to_string(), "10.0.0.0/24");
/// assert!(parse_subnet("10.0.0.1/24").is_err());
/// ```
pub fn parse_subnet(text: &str) -> Result<Ipv4Network, String> {
    let (addr, prefix) = match text.split_once('/') {
        Some((addr, prefix)) => (addr.trim(), Some(prefix.trim())),
        None => (text.trim(), None),
    };

    let address = addr
        .parse::<Ipv4Addr>()
        .map_err(|_| format!("invalid address '{addr}'"))?;

    let prefix = match prefix {
        None => 32,
        Some(prefix) => match prefix.parse::<Ipv4Addr>() {
            Ok(mask) => {
                ipv4_mask_to_prefix(mask).map_err(|_| format!("invalid netmask '{prefix}'"))?
            }
            Err(_) => prefix
                .parse::<u8>()
                .map_err(|_| format!("invalid prefix length '{prefix}'"))?,
        },
    };

    let network = Ipv4Network::new(address, prefix)
        .map_err(|_| format!("invalid prefix length '{prefix}'"))?;
    if network.network() != address {
        return Err("host bits set".to_string());
    }

    Ok(network)
}
