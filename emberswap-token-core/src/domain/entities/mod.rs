//! Domain entities and value objects
//!
//! This module contains the core entities of the asset identity model:
//! currency metadata, the two-kinded currency view, and the token entity.

pub mod currency;
pub mod token;

// Re-export entities
pub use currency::*;
pub use token::*;
