use serde::{Deserialize, Serialize};
use std::fmt;

// Basic types for asset identity
pub type Address = String;

// Supported chains - Fantom Opera, Fantom testnet, BitTorrent Chain,
// Horizen EON, BNB Smart Chain, Ethereum mainnet
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ChainId {
    FantomOpera,
    FantomTestnet,
    BitTorrent,
    HorizenEon,
    BnbSmartChain,
    Ethereum,
}

impl ChainId {
    /// Every supported chain. The wrapped-native registry is checked for
    /// totality against this list at initialization.
    pub const ALL: [ChainId; 6] = [
        ChainId::FantomOpera,
        ChainId::FantomTestnet,
        ChainId::BitTorrent,
        ChainId::HorizenEon,
        ChainId::BnbSmartChain,
        ChainId::Ethereum,
    ];

    /// EIP-155 numeric chain id.
    pub fn chain_id(&self) -> u64 {
        match self {
            ChainId::FantomOpera => 250,
            ChainId::FantomTestnet => 4002,
            ChainId::BitTorrent => 199,
            ChainId::HorizenEon => 7332,
            ChainId::BnbSmartChain => 56,
            ChainId::Ethereum => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChainId::FantomOpera => "Fantom Opera",
            ChainId::FantomTestnet => "Fantom Testnet",
            ChainId::BitTorrent => "BitTorrent Chain",
            ChainId::HorizenEon => "Horizen EON",
            ChainId::BnbSmartChain => "BNB Smart Chain",
            ChainId::Ethereum => "Ethereum",
        }
    }

    pub fn native_symbol(&self) -> &'static str {
        match self {
            ChainId::FantomOpera => "FTM",
            ChainId::FantomTestnet => "FTM",
            ChainId::BitTorrent => "BTT",
            ChainId::HorizenEon => "ZEN",
            ChainId::BnbSmartChain => "BNB",
            ChainId::Ethereum => "ETH",
        }
    }

    /// Resolve a numeric EIP-155 id back to a supported chain.
    pub fn from_chain_id(id: u64) -> Option<ChainId> {
        ChainId::ALL.iter().copied().find(|chain| chain.chain_id() == id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Result type for better error handling
pub type TokenResult<T> = Result<T, crate::shared::error::TokenError>;
