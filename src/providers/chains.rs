use alloy::providers::{DynProvider, Provider};
use futures::future::try_join;
use log::{debug, error, info};
use std::time::Duration;

use super::utils::{create_provider, split_rpc_urls};
use crate::config::{EthereumChainConfig, PolygonHermezChainConfig};
use crate::domain::{Chain, ChainKey};
use crate::errors::{BridgeError, Result};

/// Ethereum is always network 0 of the bridge
pub const ETHEREUM_NETWORK_ID: u32 = 0;

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Queries `provider` for the chain id it reports, bounded by `timeout`
pub async fn fetch_chain_id(
    chain: ChainKey,
    provider: &DynProvider,
    timeout: Duration,
) -> Result<u64> {
    debug!("Fetching chain id for {}", chain);
    let chain_id = tokio::time::timeout(timeout, provider.get_chain_id())
        .await
        .map_err(|_| BridgeError::Timeout {
            chain,
            timeout_ms: duration_ms(timeout),
        })?
        .map_err(|source| BridgeError::NetworkResolution { chain, source })?;
    debug!("{} reported chain id {}", chain, chain_id);
    Ok(chain_id)
}

/// Connects to both bridge endpoints and builds their chain descriptors.
///
/// Both chain id queries run concurrently. The call fails as a whole if either
/// of them fails; the result is always ordered `[ethereum, polygon-hermez]`.
pub async fn get_chains(
    ethereum: &EthereumChainConfig,
    polygon_hermez: &PolygonHermezChainConfig,
    timeout: Duration,
) -> Result<[Chain; 2]> {
    let ethereum_provider =
        create_provider(ChainKey::Ethereum, &split_rpc_urls(&ethereum.rpc_url))?;
    let polygon_hermez_provider = create_provider(
        ChainKey::PolygonHermez,
        &split_rpc_urls(&polygon_hermez.rpc_url),
    )?;

    resolve_chains(
        ethereum,
        polygon_hermez,
        ethereum_provider,
        polygon_hermez_provider,
        timeout,
    )
    .await
}

/// Same as [`get_chains`] with providers the caller already built
pub async fn resolve_chains(
    ethereum: &EthereumChainConfig,
    polygon_hermez: &PolygonHermezChainConfig,
    ethereum_provider: DynProvider,
    polygon_hermez_provider: DynProvider,
    timeout: Duration,
) -> Result<[Chain; 2]> {
    let (ethereum_chain_id, polygon_hermez_chain_id) = try_join(
        fetch_chain_id(ChainKey::Ethereum, &ethereum_provider, timeout),
        fetch_chain_id(ChainKey::PolygonHermez, &polygon_hermez_provider, timeout),
    )
    .await
    .map_err(|e| {
        error!("Failed to resolve bridge chains: {}", e);
        e
    })?;

    info!(
        "Resolved chains: ethereum={} polygon-hermez={}",
        ethereum_chain_id, polygon_hermez_chain_id
    );

    Ok([
        Chain {
            key: ChainKey::Ethereum,
            network_id: ETHEREUM_NETWORK_ID,
            icon: ChainKey::Ethereum.icon(),
            provider: ethereum_provider,
            chain_id: ethereum_chain_id,
            contract_address: ethereum.contract_address,
            explorer_url: ethereum.explorer_url.clone(),
        },
        Chain {
            key: ChainKey::PolygonHermez,
            network_id: polygon_hermez.network_id,
            icon: ChainKey::PolygonHermez.icon(),
            provider: polygon_hermez_provider,
            chain_id: polygon_hermez_chain_id,
            contract_address: polygon_hermez.contract_address,
            explorer_url: polygon_hermez.explorer_url.clone(),
        },
    ])
}
