use alloy::primitives::Address;
use alloy::providers::DynProvider;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two networks the bridge connects
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChainKey {
    #[display(fmt = "ethereum")]
    Ethereum,
    #[display(fmt = "polygon-hermez")]
    PolygonHermez,
}

impl ChainKey {
    pub fn icon(&self) -> &'static str {
        match self {
            ChainKey::Ethereum => "assets/icons/chains/ethereum.svg",
            ChainKey::PolygonHermez => "assets/icons/chains/polygon-hermez-chain.svg",
        }
    }
}

impl FromStr for ChainKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ethereum" => Ok(ChainKey::Ethereum),
            "polygon-hermez" => Ok(ChainKey::PolygonHermez),
            other => Err(format!("Unknown chain '{}'", other)),
        }
    }
}

/// A bridged network: its identity, RPC access and bridge contract location.
///
/// `chain_id` is whatever the live network reported when the chain was resolved.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    pub key: ChainKey,
    pub network_id: u32,
    pub icon: &'static str,
    #[serde(skip)]
    pub provider: DynProvider,
    pub chain_id: u64,
    pub contract_address: Address,
    pub explorer_url: String,
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("key", &self.key)
            .field("network_id", &self.network_id)
            .field("icon", &self.icon)
            .field("chain_id", &self.chain_id)
            .field("contract_address", &self.contract_address)
            .field("explorer_url", &self.explorer_url)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Chain {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.network_id == other.network_id
            && self.icon == other.icon
            && self.chain_id == other.chain_id
            && self.contract_address == other.contract_address
            && self.explorer_url == other.explorer_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_key_round_trip() {
        for key in [ChainKey::Ethereum, ChainKey::PolygonHermez] {
            assert_eq!(key.to_string().parse::<ChainKey>().unwrap(), key);
            assert_eq!(
                serde_json::to_value(key).unwrap(),
                serde_json::Value::String(key.to_string())
            );
        }
        assert!("polygon".parse::<ChainKey>().is_err());
    }

    #[test]
    fn test_chain_key_icons() {
        assert!(ChainKey::Ethereum.icon().ends_with("ethereum.svg"));
        assert!(ChainKey::PolygonHermez
            .icon()
            .ends_with("polygon-hermez-chain.svg"));
    }
}
