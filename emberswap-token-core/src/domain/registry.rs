//! Canonical wrapped-native token registry
//!
//! Every supported chain maps to the ERC-20 contract that wraps its native
//! currency. The table is built in one shot before the first lookup returns
//! and is read-only afterwards; a malformed, duplicate, or missing entry is
//! a defect in this file and panics at initialization instead of surfacing
//! as a runtime error.

use crate::domain::entities::token::Token;
use crate::shared::constants::WRAPPED_NATIVE_DECIMALS;
use crate::shared::types::ChainId;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref WRAPPED_NATIVE: HashMap<ChainId, Token> = build_wrapped_native();
}

/// The canonical wrapped-native token for `chain_id`.
///
/// Total over [`ChainId`]: the table is checked against [`ChainId::ALL`]
/// when it is built, so the lookup cannot fail for a supported chain.
pub fn wrapped_native(chain_id: ChainId) -> &'static Token {
    WRAPPED_NATIVE
        .get(&chain_id)
        .unwrap_or_else(|| panic!("wrapped-native registry has no entry for {}", chain_id))
}

fn build_wrapped_native() -> HashMap<ChainId, Token> {
    let entries = [
        (
            ChainId::FantomOpera,
            "0x21be370D5312f44cB42ce377BC9b8a0cEF1A4C83",
            "WFTM",
            "Wrapped FTM",
        ),
        (
            ChainId::FantomTestnet,
            "0xf1277d1Ed8AD466beddF92ef448A132661956621",
            "WFTM",
            "Wrapped FTM",
        ),
        (
            ChainId::BitTorrent,
            "0x23181f21dea5936e24163ffaba4ea3b316b57f3c",
            "WBTT",
            "Wrapped BitTorrent",
        ),
        (
            ChainId::HorizenEon,
            "0xF5cB8652a84329A2016A386206761f455bCEDab6",
            "WZEN",
            "Wrapped ZEN",
        ),
        (
            ChainId::BnbSmartChain,
            "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c",
            "WBNB",
            "Wrapped BNB",
        ),
        (
            ChainId::Ethereum,
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
            "WETH",
            "Wrapped Ether",
        ),
    ];

    let mut table = HashMap::with_capacity(entries.len());
    for (chain_id, address, symbol, name) in entries {
        let token = Token::new(
            chain_id,
            address,
            WRAPPED_NATIVE_DECIMALS,
            Some(symbol),
            Some(name),
        )
        .unwrap_or_else(|e| panic!("wrapped-native entry for {} is invalid: {}", chain_id, e));

        // Key by the token's own chain so an entry can never be filed under
        // a chain it does not belong to.
        let previous = table.insert(token.chain_id(), token);
        assert!(
            previous.is_none(),
            "duplicate wrapped-native entry for {}",
            chain_id
        );
    }

    for chain_id in ChainId::ALL {
        assert!(
            table.contains_key(&chain_id),
            "wrapped-native registry is missing {}",
            chain_id
        );
    }

    log::debug!(
        "wrapped-native registry initialized with {} chains",
        table.len()
    );
    table
}
