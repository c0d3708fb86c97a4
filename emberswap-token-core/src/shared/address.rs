//! Address validation and normalization
//!
//! Token construction depends on this module as its validation collaborator:
//! every stored address is the output of [`validate_and_checksum`]. Inputs
//! of any casing are accepted; the output is the EIP-55 checksummed form,
//! so normalization is deterministic and idempotent.

use crate::shared::constants::{
    ADDRESS_BYTES_LENGTH, ADDRESS_LENGTH, ADDRESS_PREFIX,
};
use crate::shared::error::AddressError;
use crate::shared::types::Address;
use sha3::{Digest, Keccak256};

/// Validate an EVM address string and return its canonical checksummed form.
///
/// Fails for malformed input (missing `0x` prefix, wrong length, non-hex
/// characters); never fails on casing alone.
pub fn validate_and_checksum(address: &str) -> Result<Address, AddressError> {
    validate_format(address)?;
    Ok(to_checksum(address))
}

fn validate_format(address: &str) -> Result<(), AddressError> {
    if !address.starts_with(ADDRESS_PREFIX) {
        return Err(AddressError::MissingPrefix(address.to_string()));
    }

    if address.len() != ADDRESS_LENGTH {
        return Err(AddressError::InvalidLength {
            address: address.to_string(),
            length: address.len(),
        });
    }

    let hex_part = &address[ADDRESS_PREFIX.len()..];
    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AddressError::InvalidHex(address.to_string()));
    }

    let bytes = hex::decode(hex_part)
        .map_err(|_| AddressError::InvalidHex(address.to_string()))?;
    debug_assert_eq!(bytes.len(), ADDRESS_BYTES_LENGTH);

    Ok(())
}

// EIP-55: hash the lowercase hex form, uppercase every hex letter whose
// corresponding hash nibble is >= 8.
fn to_checksum(address: &str) -> Address {
    let lower = address.to_lowercase();
    let hex_part = &lower[ADDRESS_PREFIX.len()..];

    let mut hasher = Keccak256::new();
    hasher.update(hex_part.as_bytes());
    let hash = hasher.finalize();

    let mut checksummed = String::with_capacity(ADDRESS_LENGTH);
    checksummed.push_str(ADDRESS_PREFIX);
    for (i, ch) in hex_part.chars().enumerate() {
        let hash_byte = hash[i / 2];
        let nibble = if i % 2 == 0 { hash_byte >> 4 } else { hash_byte & 0x0f };
        if nibble >= 8 && ch.is_ascii_alphabetic() {
            checksummed.push(ch.to_ascii_uppercase());
        } else {
            checksummed.push(ch);
        }
    }

    checksummed
}
