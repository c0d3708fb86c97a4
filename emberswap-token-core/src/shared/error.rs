//! Error handling for the token core
//!
//! This module defines the error types used throughout the token core.
//! Every error is local and synchronous: it reflects either malformed input
//! or a caller logic error, never a transient condition, so retrying is
//! never appropriate.

use crate::shared::types::{Address, ChainId};
use thiserror::Error;

/// Rejection reasons of the address validation collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Address must start with 0x: {0}")]
    MissingPrefix(String),

    #[error("Address must be 42 characters (0x + 40 hex chars), got {length}: {address}")]
    InvalidLength { address: String, length: usize },

    #[error("Address contains non-hex characters: {0}")]
    InvalidHex(String),
}

/// Token error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The address collaborator rejected the input; no token is constructed.
    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    /// Tokens on different chains have no defined order.
    #[error("Cannot order tokens across chains: {left} vs {right}")]
    CrossChainComparison { left: ChainId, right: ChainId },

    /// A token is never ordered against its own address.
    #[error("Cannot order two tokens sharing the address {0}")]
    IdenticalAddress(Address),
}
