//! EVM address normalization
//!
//! The facade accepts addresses as strings in any letter case and normalizes
//! them to the canonical 20-byte form before they reach a contract call.
//! Checksummed rendering follows EIP-55.

use alloy::primitives::Address;
use eyre::{eyre, Result};

/// Parse an address string (with or without `0x` prefix, any letter case)
/// into its canonical form.
pub fn normalize(input: &str) -> Result<Address> {
    input
        .trim()
        .parse::<Address>()
        .map_err(|e| eyre!("Invalid address {:?}: {}", input, e))
}

/// Render an address string in EIP-55 checksummed form.
///
/// Normalizing an already-checksummed string yields the same string.
pub fn to_checksum(input: &str) -> Result<String> {
    Ok(normalize(input)?.to_checksum(None))
}
