use alloy::transports::TransportError;
use thiserror::Error;

use crate::domain::ChainKey;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Failed to resolve network for {chain}: {source}")]
    NetworkResolution {
        chain: ChainKey,
        #[source]
        source: TransportError,
    },

    #[error("Network query for {chain} timed out after {timeout_ms}ms")]
    Timeout { chain: ChainKey, timeout_ms: u64 },

    #[error("Invalid RPC url '{url}': {source}")]
    InvalidRpcUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("No RPC url configured for {0}")]
    MissingRpcUrl(ChainKey),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BridgeError {
    /// Chain the failure originated from, if it came from a network query
    pub fn chain(&self) -> Option<ChainKey> {
        match self {
            BridgeError::NetworkResolution { chain, .. } | BridgeError::Timeout { chain, .. } => {
                Some(*chain)
            }
            BridgeError::MissingRpcUrl(chain) => Some(*chain),
            _ => None,
        }
    }
}

pub type Result<T, E = BridgeError> = std::result::Result<T, E>;
