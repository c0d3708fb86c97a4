//! Currency metadata and the polymorphic currency model
//!
//! [`CurrencyMeta`] is the minimal shared shape of any fungible asset:
//! decimal precision plus optional display strings, with no notion of chain
//! or address. [`Currency`] is the two-kinded view over native currencies
//! and contract-backed tokens that [`currency_equals`] dispatches on.

use super::token::Token;
use serde::{Deserialize, Serialize};

/// Decimal precision and optional display metadata for a fungible asset.
///
/// Purely descriptive: metadata never participates in token identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyMeta {
    pub decimals: u8,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

impl CurrencyMeta {
    pub fn new(decimals: u8, symbol: Option<&str>, name: Option<&str>) -> Self {
        Self {
            decimals,
            symbol: symbol.map(str::to_string),
            name: name.map(str::to_string),
        }
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A fungible asset of either kind: a chain's native currency described by
/// bare metadata, or a contract-backed [`Token`].
///
/// Deliberately not `PartialEq`: equality over currencies is the three-way
/// dispatch of [`currency_equals`], not a structural comparison.
#[derive(Debug, Clone)]
pub enum Currency {
    Native(CurrencyMeta),
    Token(Token),
}

impl Currency {
    /// A native (non-contract) currency from bare metadata.
    pub fn native(decimals: u8, symbol: Option<&str>, name: Option<&str>) -> Self {
        Currency::Native(CurrencyMeta::new(decimals, symbol, name))
    }

    pub fn decimals(&self) -> u8 {
        match self {
            Currency::Native(meta) => meta.decimals,
            Currency::Token(token) => token.decimals(),
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            Currency::Native(meta) => meta.symbol(),
            Currency::Token(token) => token.symbol(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Currency::Native(meta) => meta.name(),
            Currency::Token(token) => token.name(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native(_))
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Currency::Token(_))
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Currency::Token(token)
    }
}

/// Compares two currencies for equality.
///
/// Dispatches on the kind of each argument: two tokens compare by chain and
/// address, a token and a native currency are never equal (even when they
/// describe the same conceptual asset), and two native currencies are equal
/// only when they are the same value in memory - independently constructed
/// metadata never compares equal.
pub fn currency_equals(a: &Currency, b: &Currency) -> bool {
    match (a, b) {
        (Currency::Token(token_a), Currency::Token(token_b)) => token_a == token_b,
        (Currency::Token(_), Currency::Native(_)) => false,
        (Currency::Native(_), Currency::Token(_)) => false,
        (Currency::Native(_), Currency::Native(_)) => std::ptr::eq(a, b),
    }
}
