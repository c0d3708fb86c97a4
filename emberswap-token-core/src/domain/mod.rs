//! Domain layer - asset identity entities and the wrapped-native registry
//!
//! This module contains the business rules of the token model: what a
//! currency and a token are, when two of them are the same asset, and
//! which contract wraps each chain's native currency.

pub mod entities;
pub mod registry;

// Re-export domain components
pub use entities::*;
pub use registry::*;
