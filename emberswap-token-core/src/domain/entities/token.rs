//! Token entity
//!
//! A token is a contract-backed asset pinned to one chain. Its identity is
//! the `(chain, address)` pair; the embedded [`CurrencyMeta`] is descriptive
//! only. Addresses are validated and checksummed once, at construction, so
//! every reachable `Token` already holds its normalized form.

use super::currency::CurrencyMeta;
use crate::shared::address::validate_and_checksum;
use crate::shared::error::TokenError;
use crate::shared::types::{Address, ChainId, TokenResult};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A contract-backed asset with a validated, checksummed address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawToken")]
pub struct Token {
    chain_id: ChainId,
    address: Address,
    #[serde(flatten)]
    meta: CurrencyMeta,
}

/// Wire shape for [`Token`]. Deserialization routes through [`Token::new`]
/// so persisted or remote data gets the same validation as local input.
#[derive(Deserialize)]
struct RawToken {
    chain_id: ChainId,
    address: String,
    #[serde(flatten)]
    meta: CurrencyMeta,
}

impl TryFrom<RawToken> for Token {
    type Error = TokenError;

    fn try_from(raw: RawToken) -> Result<Self, Self::Error> {
        Token::new(
            raw.chain_id,
            &raw.address,
            raw.meta.decimals,
            raw.meta.symbol.as_deref(),
            raw.meta.name.as_deref(),
        )
    }
}

impl Token {
    /// Constructs a token from its chain, contract address, and metadata.
    ///
    /// The address may arrive in any casing; it is validated and normalized
    /// to its checksummed form before the token exists. A rejected address
    /// aborts construction, so no token with an unvalidated address is ever
    /// observable.
    pub fn new(
        chain_id: ChainId,
        address: &str,
        decimals: u8,
        symbol: Option<&str>,
        name: Option<&str>,
    ) -> TokenResult<Self> {
        let address = validate_and_checksum(address)?;
        Ok(Self {
            chain_id,
            address,
            meta: CurrencyMeta::new(decimals, symbol, name),
        })
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// The checksummed contract address.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn meta(&self) -> &CurrencyMeta {
        &self.meta
    }

    pub fn decimals(&self) -> u8 {
        self.meta.decimals
    }

    pub fn symbol(&self) -> Option<&str> {
        self.meta.symbol()
    }

    pub fn name(&self) -> Option<&str> {
        self.meta.name()
    }

    /// Whether this token's address sorts before `other`'s.
    ///
    /// The order is the lexicographic comparison of the lower-cased address
    /// strings, a deterministic tie-break that is independent of checksum
    /// casing. It is only defined between two distinct tokens on the same
    /// chain; comparing across chains or against the same address is a
    /// caller logic error and fails rather than producing an arbitrary
    /// answer.
    pub fn sorts_before(&self, other: &Token) -> TokenResult<bool> {
        if self.chain_id != other.chain_id {
            return Err(TokenError::CrossChainComparison {
                left: self.chain_id,
                right: other.chain_id,
            });
        }
        if self.address == other.address {
            return Err(TokenError::IdenticalAddress(self.address.clone()));
        }
        Ok(self.address.to_lowercase() < other.address.to_lowercase())
    }
}

// Identity is the (chain, address) pair; metadata stays out of equality and
// hashing so tokens with divergent display data still collapse to one key.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // Checksummed test fixtures from EIP-55.
    const CHECKSUMMED: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    const OTHER: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

    fn token(chain_id: ChainId, address: &str) -> Token {
        Token::new(chain_id, address, 18, Some("TKN"), Some("Test Token"))
            .expect("fixture address must be valid")
    }

    #[test]
    fn test_construction_stores_checksummed_address() {
        let from_lower = token(ChainId::FantomOpera, &CHECKSUMMED.to_lowercase());
        assert_eq!(from_lower.address(), CHECKSUMMED);

        let from_upper = token(
            ChainId::FantomOpera,
            &CHECKSUMMED.to_uppercase().replace("0X", "0x"),
        );
        assert_eq!(from_upper.address(), CHECKSUMMED);
    }

    #[test]
    fn test_construction_rejects_invalid_address() {
        assert!(Token::new(ChainId::FantomOpera, "abc", 18, None, None).is_err());
        assert!(Token::new(ChainId::FantomOpera, "0x123", 18, None, None).is_err());

        let err = Token::new(ChainId::FantomOpera, "not-an-address", 18, None, None)
            .expect_err("must reject");
        assert!(matches!(err, TokenError::InvalidAddress(_)));
    }

    #[test]
    fn test_metadata_accessors() {
        let t = Token::new(
            ChainId::Ethereum,
            CHECKSUMMED,
            6,
            Some("USDC"),
            Some("USD Coin"),
        )
        .expect("fixture address must be valid");
        assert_eq!(t.chain_id(), ChainId::Ethereum);
        assert_eq!(t.decimals(), 6);
        assert_eq!(t.symbol(), Some("USDC"));
        assert_eq!(t.name(), Some("USD Coin"));
        assert_eq!(t.meta().decimals(), 6);

        let bare = Token::new(ChainId::Ethereum, CHECKSUMMED, 18, None, None)
            .expect("fixture address must be valid");
        assert_eq!(bare.symbol(), None);
        assert_eq!(bare.name(), None);
    }

    #[test]
    fn test_equality_ignores_input_casing() {
        let lower = token(ChainId::FantomOpera, &CHECKSUMMED.to_lowercase());
        let mixed = token(ChainId::FantomOpera, CHECKSUMMED);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn test_equality_ignores_metadata() {
        let a = Token::new(ChainId::FantomOpera, CHECKSUMMED, 18, Some("AAA"), Some("First"))
            .expect("fixture address must be valid");
        let b = Token::new(ChainId::FantomOpera, CHECKSUMMED, 6, Some("BBB"), None)
            .expect("fixture address must be valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_inequality_across_chains_and_addresses() {
        let fantom = token(ChainId::FantomOpera, CHECKSUMMED);
        let ethereum = token(ChainId::Ethereum, CHECKSUMMED);
        assert_ne!(fantom, ethereum);

        let other = token(ChainId::FantomOpera, OTHER);
        assert_ne!(fantom, other);
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        let mut set = HashSet::new();
        set.insert(token(ChainId::FantomOpera, &CHECKSUMMED.to_lowercase()));
        set.insert(token(ChainId::FantomOpera, CHECKSUMMED));
        assert_eq!(set.len(), 1);

        set.insert(token(ChainId::Ethereum, CHECKSUMMED));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_sorts_before_orders_by_lowercased_address() {
        // "5aae..." < "fb69..." lexicographically.
        let low = token(ChainId::FantomOpera, CHECKSUMMED);
        let high = token(ChainId::FantomOpera, OTHER);

        assert!(low.sorts_before(&high).expect("same chain, distinct addresses"));
        assert!(!high.sorts_before(&low).expect("same chain, distinct addresses"));
    }

    #[test]
    fn test_sorts_before_is_independent_of_casing() {
        let low = token(ChainId::FantomOpera, &CHECKSUMMED.to_lowercase());
        let high = token(ChainId::FantomOpera, OTHER);
        assert!(low.sorts_before(&high).expect("same chain, distinct addresses"));
    }

    #[test]
    fn test_sorts_before_rejects_cross_chain() {
        let fantom = token(ChainId::FantomOpera, CHECKSUMMED);
        let bnb = token(ChainId::BnbSmartChain, OTHER);

        let err = fantom.sorts_before(&bnb).expect_err("chains differ");
        assert_eq!(
            err,
            TokenError::CrossChainComparison {
                left: ChainId::FantomOpera,
                right: ChainId::BnbSmartChain,
            }
        );
    }

    #[test]
    fn test_sorts_before_rejects_identical_address() {
        let a = token(ChainId::FantomOpera, CHECKSUMMED);
        let b = token(ChainId::FantomOpera, &CHECKSUMMED.to_lowercase());

        let err = a.sorts_before(&b).expect_err("same address");
        assert_eq!(err, TokenError::IdenticalAddress(CHECKSUMMED.to_string()));
    }

    #[test]
    fn test_chain_check_precedes_address_check() {
        // Same address on two chains: the cross-chain error wins.
        let a = token(ChainId::FantomOpera, CHECKSUMMED);
        let b = token(ChainId::Ethereum, CHECKSUMMED);
        let err = a.sorts_before(&b).expect_err("chains differ");
        assert!(matches!(err, TokenError::CrossChainComparison { .. }));
    }

    #[test]
    fn test_serialize_emits_checksummed_address() {
        let t = token(ChainId::FantomOpera, &CHECKSUMMED.to_lowercase());
        let json = serde_json::to_string(&t).expect("token serializes");
        assert!(json.contains(CHECKSUMMED));
        assert!(json.contains("FantomOpera"));
    }

    #[test]
    fn test_deserialize_revalidates_and_normalizes() {
        let json = format!(
            r#"{{"chain_id":"FantomOpera","address":"{}","decimals":18,"symbol":"TKN","name":"Test Token"}}"#,
            CHECKSUMMED.to_lowercase()
        );
        let t: Token = serde_json::from_str(&json).expect("valid token payload");
        assert_eq!(t.address(), CHECKSUMMED);
        assert_eq!(t.symbol(), Some("TKN"));
    }

    #[test]
    fn test_deserialize_rejects_invalid_address() {
        let json = r#"{"chain_id":"Ethereum","address":"0x1234","decimals":18,"symbol":null,"name":null}"#;
        assert!(serde_json::from_str::<Token>(json).is_err());
    }

    #[test]
    fn test_serde_round_trip_preserves_identity_and_metadata() {
        let original = Token::new(
            ChainId::BitTorrent,
            CHECKSUMMED,
            8,
            Some("WBTT"),
            Some("Wrapped BitTorrent"),
        )
        .expect("fixture address must be valid");

        let json = serde_json::to_string(&original).expect("token serializes");
        let restored: Token = serde_json::from_str(&json).expect("round-trip deserializes");

        assert_eq!(original, restored);
        assert_eq!(original.meta(), restored.meta());
    }
}
