use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::transports::http::Http;
use alloy::transports::layers::FallbackLayer;
use std::num::NonZeroUsize;
use tower::ServiceBuilder;

use crate::domain::ChainKey;
use crate::errors::{BridgeError, Result};

/// Splits a configured endpoint into its individual RPC urls.
/// Several urls may be given separated by commas.
pub fn split_rpc_urls(rpc_url: &str) -> Vec<String> {
    rpc_url
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Builds an HTTP provider for `chain`. Multiple urls share one fallback transport.
pub fn create_provider(chain: ChainKey, rpcs: &[String]) -> Result<DynProvider> {
    let active = NonZeroUsize::new(rpcs.len()).ok_or(BridgeError::MissingRpcUrl(chain))?;
    let fallback_layer = FallbackLayer::default().with_active_transport_count(active);

    let transports = rpcs
        .iter()
        .map(|url| {
            url.parse()
                .map(Http::new)
                .map_err(|source| BridgeError::InvalidRpcUrl {
                    url: url.clone(),
                    source,
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let transport = ServiceBuilder::new()
        .layer(fallback_layer)
        .service(transports);
    let client = RpcClient::builder().transport(transport, false);
    let provider = ProviderBuilder::new().connect_client(client);
    Ok(provider.erased())
}
