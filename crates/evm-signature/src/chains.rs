use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EvmError;

/// Supported networks, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Polygon,
    Ropsten,
}

impl Chain {
    pub const ALL: [Chain; 3] = [Chain::Ethereum, Chain::Polygon, Chain::Ropsten];

    pub const fn as_str(self) -> &'static str {
        match self {
            Chain::Ethereum => "ethereum",
            Chain::Polygon => "polygon",
            Chain::Ropsten => "ropsten",
        }
    }

    /// Whether this is a testnet
    pub const fn is_testnet(self) -> bool {
        matches!(self, Chain::Ropsten)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chain {
    type Err = EvmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| EvmError::UnsupportedChain(s.to_owned()))
    }
}

/// Supported networks, by numeric chain id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
#[repr(u64)]
pub enum ChainId {
    /// Rinkeby testnet.
    Rinkeby = 4,
    /// Polygon (Matic) mainnet.
    Matic = 137,
}

impl ChainId {
    pub const fn value(self) -> u64 {
        self as u64
    }
}

impl TryFrom<u64> for ChainId {
    type Error = EvmError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        match id {
            4 => Ok(ChainId::Rinkeby),
            137 => Ok(ChainId::Matic),
            other => Err(EvmError::UnsupportedChain(other.to_string())),
        }
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_names() {
        assert_eq!(Chain::Ethereum.as_str(), "ethereum");
        assert_eq!(Chain::Polygon.as_str(), "polygon");
        assert_eq!(Chain::Ropsten.as_str(), "ropsten");
    }

    #[test]
    fn chain_from_str() {
        for chain in Chain::ALL {
            assert_eq!(chain.as_str().parse::<Chain>().unwrap(), chain);
        }
        assert!("Ethereum".parse::<Chain>().is_err());
        assert!("solana".parse::<Chain>().is_err());
    }

    #[test]
    fn only_ropsten_is_testnet() {
        let testnets: Vec<_> = Chain::ALL.iter().filter(|c| c.is_testnet()).collect();
        assert_eq!(testnets, vec![&Chain::Ropsten]);
    }

    #[test]
    fn chain_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Chain::Polygon).unwrap(), "\"polygon\"");
        let chain: Chain = serde_json::from_str("\"ropsten\"").unwrap();
        assert_eq!(chain, Chain::Ropsten);
    }

    #[test]
    fn chain_id_values() {
        assert_eq!(ChainId::Rinkeby.value(), 4);
        assert_eq!(ChainId::Matic.value(), 137);
    }

    #[test]
    fn chain_id_try_from() {
        assert_eq!(ChainId::try_from(4).unwrap(), ChainId::Rinkeby);
        assert_eq!(ChainId::try_from(137).unwrap(), ChainId::Matic);

        let err = ChainId::try_from(1).unwrap_err();
        assert_eq!(err.to_string(), "unsupported chain: 1");
    }

    #[test]
    fn chain_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&ChainId::Matic).unwrap(), "137");
        let id: ChainId = serde_json::from_str("4").unwrap();
        assert_eq!(id, ChainId::Rinkeby);
        assert!(serde_json::from_str::<ChainId>("5").is_err());
    }
}
