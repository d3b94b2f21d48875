pub mod config;
pub mod constants;
pub mod domain;
pub mod errors;
pub mod providers;
pub mod report;
pub mod storage;
pub mod tokens;

pub use domain::{Chain, ChainKey, Currency, Token};
pub use errors::{BridgeError, Result};
pub use providers::get_chains;
pub use tokens::{get_chain_tokens, get_ether_token, get_usdt_token, Erc20Table};
