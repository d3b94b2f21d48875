use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fungible asset on a given chain. `Address::ZERO` marks the chain's native coin.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub name: String,
    pub address: Address,
    pub chain_id: u64,
    pub symbol: String,
    pub decimals: u8,
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
}

impl Token {
    pub fn new(
        name: String,
        address: Address,
        chain_id: u64,
        symbol: String,
        decimals: u8,
        logo_uri: String,
    ) -> Self {
        Self {
            name,
            address,
            chain_id,
            symbol,
            decimals,
            logo_uri,
        }
    }

    /// Identity of the token across token lists
    pub fn key(&self) -> (Address, u64) {
        (self.address, self.chain_id)
    }

    pub fn is_native(&self) -> bool {
        self.address == Address::ZERO
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) at {} on chain {}",
            self.symbol, self.name, self.address, self.chain_id
        )
    }
}
