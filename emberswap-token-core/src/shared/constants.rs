//! Constants for the token core
//!
//! This module contains the constants used throughout the token core.

// Address format constants
pub const ADDRESS_PREFIX: &str = "0x";
pub const ADDRESS_LENGTH: usize = 42; // 0x + 40 hex chars
pub const ADDRESS_HEX_LENGTH: usize = 40;
pub const ADDRESS_BYTES_LENGTH: usize = 20;

// Registry constants
pub const WRAPPED_NATIVE_DECIMALS: u8 = 18;
