//! EmberSwap Token Core
//!
//! Identity and comparison model for the fungible assets EmberSwap trades.
//! Answers "are these the same asset?" and "which of these two orders
//! first?" for tokens across the supported chains, and knows the canonical
//! wrapped form of each chain's native currency.
//!
//! ## Architecture
//!
//! This library follows a simplified architecture focused on core functionality:
//!
//! - **Domain**: currency and token entities, the wrapped-native registry
//! - **Shared**: chain enumeration, address validation, errors, constants
//!
//! ## Guarantees
//!
//! - Every reachable `Token` holds a validated, checksummed address
//! - Token identity is the `(chain, address)` pair; metadata never leaks in
//! - Ordering is only defined where it is meaningful (same chain, distinct
//!   addresses) and fails loudly everywhere else
//! - The wrapped-native registry is total over the supported chains
//!
//! ## Usage
//!
//! ```rust
//! use emberswap_token_core::{wrapped_native, ChainId, Token};
//!
//! let wftm = wrapped_native(ChainId::FantomOpera);
//! let usdc = Token::new(
//!     ChainId::FantomOpera,
//!     "0x04068DA6C83AFCFA0e13ba15A6696662335D5B75",
//!     6,
//!     Some("USDC"),
//!     Some("USD Coin"),
//! )?;
//!
//! // USDC is token0 in a USDC/WFTM pair.
//! assert!(usdc.sorts_before(wftm)?);
//! assert_ne!(&usdc, wftm);
//! # Ok::<(), emberswap_token_core::TokenError>(())
//! ```

// Re-export main modules for easy access
pub mod domain;
pub mod shared;

// Re-export domain entities
pub use domain::entities::currency::{currency_equals, Currency, CurrencyMeta};
pub use domain::entities::token::Token;
pub use domain::registry::wrapped_native;

// Re-export shared types
pub use shared::address::validate_and_checksum;
pub use shared::error::{AddressError, TokenError};
pub use shared::types::{Address, ChainId, TokenResult};

// Initialize logging for embedding applications
pub fn init() -> Result<(), log::SetLoggerError> {
    env_logger::try_init()
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
