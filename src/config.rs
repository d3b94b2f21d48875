use alloy::primitives::{address, Address};
use anyhow::{anyhow, Result};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

const DEFAULT_BRIDGE_CONTRACT_ADDRESS: Address =
    address!("0x10b65c586f795af3eccee594fe4e38e1f059f780");

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub ethereum: EthereumChainConfig,
    pub polygon_hermez: PolygonHermezChainConfig,
    #[serde(default)]
    pub rpc: RpcConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EthereumChainConfig {
    pub rpc_url: String,
    pub explorer_url: String,
    pub contract_address: Address,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PolygonHermezChainConfig {
    pub rpc_url: String,
    pub explorer_url: String,
    pub contract_address: Address,
    pub network_id: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RpcConfig {
    /// Upper bound for each chain id query
    pub timeout_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    pub custom_tokens_path: PathBuf,
    /// Replaces the bundled ERC-20 token list when set
    #[serde(default)]
    pub erc20_tokens_path: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self { timeout_ms: 10_000 }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            custom_tokens_path: PathBuf::from("data/custom-tokens.json"),
            erc20_tokens_path: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            ethereum: EthereumChainConfig {
                rpc_url: "http://localhost:8545".to_string(),
                explorer_url: "http://localhost:4000".to_string(),
                contract_address: DEFAULT_BRIDGE_CONTRACT_ADDRESS,
            },
            polygon_hermez: PolygonHermezChainConfig {
                rpc_url: "http://localhost:8123".to_string(),
                explorer_url: "http://localhost:4001".to_string(),
                contract_address: DEFAULT_BRIDGE_CONTRACT_ADDRESS,
                network_id: 1,
            },
            rpc: RpcConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl RpcConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_or_env(DEFAULT_CONFIG_PATH)
    }

    /// Loads `path`, falling back to environment variables or defaults
    pub fn load_or_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Loading config from {}", path.as_ref().display());
        match Self::load_from_file(&path) {
            Ok(config) => {
                info!("Config loaded from file");
                Ok(config)
            }
            Err(e) => {
                error!("Failed to load config from file: {}", e);
                info!("Falling back to environment variables or defaults");
                Ok(Self::from_env())
            }
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(rpc_url) = std::env::var("ETHEREUM_RPC_URL") {
            config.ethereum.rpc_url = rpc_url;
        }

        if let Ok(explorer_url) = std::env::var("ETHEREUM_EXPLORER_URL") {
            config.ethereum.explorer_url = explorer_url;
        }

        if let Ok(address) = std::env::var("ETHEREUM_BRIDGE_CONTRACT_ADDRESS") {
            match address.parse::<Address>() {
                Ok(address) => config.ethereum.contract_address = address,
                Err(e) => warn!("Ignoring ETHEREUM_BRIDGE_CONTRACT_ADDRESS: {}", e),
            }
        }

        if let Ok(rpc_url) = std::env::var("POLYGON_HERMEZ_RPC_URL") {
            config.polygon_hermez.rpc_url = rpc_url;
        }

        if let Ok(explorer_url) = std::env::var("POLYGON_HERMEZ_EXPLORER_URL") {
            config.polygon_hermez.explorer_url = explorer_url;
        }

        if let Ok(address) = std::env::var("POLYGON_HERMEZ_BRIDGE_CONTRACT_ADDRESS") {
            match address.parse::<Address>() {
                Ok(address) => config.polygon_hermez.contract_address = address,
                Err(e) => warn!("Ignoring POLYGON_HERMEZ_BRIDGE_CONTRACT_ADDRESS: {}", e),
            }
        }

        if let Ok(network_id) = std::env::var("POLYGON_HERMEZ_NETWORK_ID") {
            if let Ok(network_id) = network_id.parse::<u32>() {
                config.polygon_hermez.network_id = network_id;
            }
        }

        if let Ok(timeout) = std::env::var("RPC_TIMEOUT_MS") {
            if let Ok(timeout_ms) = timeout.parse::<u64>() {
                config.rpc.timeout_ms = timeout_ms;
            }
        }

        if let Ok(path) = std::env::var("CUSTOM_TOKENS_PATH") {
            config.storage.custom_tokens_path = PathBuf::from(path);
        }

        if let Ok(path) = std::env::var("ERC20_TOKENS_PATH") {
            config.storage.erc20_tokens_path = Some(PathBuf::from(path));
        }

        if let Ok(log_level) = std::env::var("RUST_LOG") {
            config.log_level = log_level;
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.ethereum.rpc_url.trim().is_empty() {
            return Err(anyhow!("Ethereum RPC url not configured"));
        }

        if self.polygon_hermez.rpc_url.trim().is_empty() {
            return Err(anyhow!("Polygon Hermez RPC url not configured"));
        }

        if self.rpc.timeout_ms == 0 {
            return Err(anyhow!("RPC timeout must be greater than zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.ethereum.rpc_url, "http://localhost:8545");
        assert_eq!(config.polygon_hermez.rpc_url, "http://localhost:8123");
        assert_eq!(config.polygon_hermez.network_id, 1);
        assert_eq!(config.rpc.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_env() {
        std::env::set_var("POLYGON_HERMEZ_RPC_URL", "https://rpc.public.zkevm-test.net");
        std::env::set_var("POLYGON_HERMEZ_NETWORK_ID", "7");
        std::env::set_var("ETHEREUM_BRIDGE_CONTRACT_ADDRESS", "not-an-address");

        let config = Config::from_env();
        assert_eq!(
            config.polygon_hermez.rpc_url,
            "https://rpc.public.zkevm-test.net"
        );
        assert_eq!(config.polygon_hermez.network_id, 7);
        assert_eq!(
            config.ethereum.contract_address,
            DEFAULT_BRIDGE_CONTRACT_ADDRESS
        );

        // Clean up
        std::env::remove_var("POLYGON_HERMEZ_RPC_URL");
        std::env::remove_var("POLYGON_HERMEZ_NETWORK_ID");
        std::env::remove_var("ETHEREUM_BRIDGE_CONTRACT_ADDRESS");
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            [ethereum]
            rpc_url = "https://goerli.example"
            explorer_url = "https://goerli.etherscan.io"
            contract_address = "0x10b65c586f795af3eccee594fe4e38e1f059f780"

            [polygon_hermez]
            rpc_url = "https://zkevm.example"
            explorer_url = "https://explorer.zkevm.example"
            contract_address = "0x10b65c586f795af3eccee594fe4e38e1f059f780"
            network_id = 1
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ethereum.rpc_url, "https://goerli.example");
        assert_eq!(config.rpc, RpcConfig::default());
        assert_eq!(config.storage, StorageConfig::default());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(toml_string.contains("localhost:8545"));
        assert!(toml_string.contains("network_id = 1"));

        let decoded: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(decoded.polygon_hermez, config.polygon_hermez);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.rpc.timeout_ms = 0;
        assert!(config.validate().is_err());
    }
}
