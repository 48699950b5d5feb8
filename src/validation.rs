//! Input validation for blocklist operations.

use std::net::IpAddr;

use crate::error::{Result, UfwbanError};
use crate::store::BlockEntry;

/// Validate an IP address string and return the canonical entry.
///
/// Accepts plain IPv4 and IPv6 addresses only. Hostnames, CIDR ranges,
/// surrounding whitespace and empty strings are rejected. The returned
/// entry carries the normalized form of the address, which is what gets
/// persisted and passed to the firewall.
///
/// # Examples
/// ```
/// use ufwban::validation::validate_address;
/// assert!(validate_address("192.168.1.1").is_ok());
/// assert!(validate_address("::1").is_ok());
/// assert!(validate_address("not-an-ip").is_err());
/// assert!(validate_address("192.168.1.0/24").is_err());
/// ```
pub fn validate_address(input: &str) -> Result<BlockEntry> {
    input
        .parse::<IpAddr>()
        .map(BlockEntry::from)
        .map_err(|_| UfwbanError::Validation(input.to_string()))
}
