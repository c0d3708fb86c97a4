//! Shared types, constants, and the address collaborator
//!
//! This module contains the common types, constants, and validation helpers
//! used throughout the token core.

pub mod address;
pub mod constants;
pub mod error;
pub mod types;

// Re-export shared components
pub use address::*;
pub use constants::*;
pub use error::*;
pub use types::*;
