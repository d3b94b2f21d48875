use log::{debug, info};
use std::fs;
use std::path::Path;

use super::factory::get_ether_token;
use crate::domain::{Chain, Token};
use crate::errors::Result;
use crate::storage::TokenCleanup;

const BUNDLED_ERC20_TOKENS: &str = include_str!("../../assets/erc20-tokens.json");

/// Read-only reference list of ERC-20 tokens across the supported chains
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Erc20Table {
    tokens: Vec<Token>,
}

impl Erc20Table {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The token list shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_ERC20_TOKENS)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let tokens: Vec<Token> = serde_json::from_str(json)?;
        Ok(Self::new(tokens))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let table = Self::from_json(&contents)?;
        info!(
            "Loaded {} ERC-20 tokens from {}",
            table.len(),
            path.as_ref().display()
        );
        Ok(table)
    }

    /// Entries on `chain_id`, in table order
    pub fn tokens_for_chain(&self, chain_id: u64) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(move |t| t.chain_id == chain_id)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tokens available on `chain`: the native coin first, then the table's
/// entries for that chain in table order, passed through `cleanup`.
pub fn get_chain_tokens<C: TokenCleanup + ?Sized>(
    chain: &Chain,
    erc20_tokens: &Erc20Table,
    cleanup: &C,
) -> Vec<Token> {
    let tokens: Vec<Token> = std::iter::once(get_ether_token(chain))
        .chain(erc20_tokens.tokens_for_chain(chain.chain_id).cloned())
        .collect();
    debug!("Assembled {} tokens for {}", tokens.len(), chain.key);
    cleanup.cleanup(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChainKey;
    use crate::storage::{CustomTokenStorage, MemoryStorage, NoCleanup};
    use crate::tokens::factory::test_utils::offline_chain;
    use alloy::primitives::{address, Address};

    fn token(address: Address, chain_id: u64, symbol: &str) -> Token {
        Token::new(
            symbol.to_string(),
            address,
            chain_id,
            symbol.to_string(),
            18,
            String::new(),
        )
    }

    fn table() -> Erc20Table {
        Erc20Table::new(vec![
            token(address!("0x0000000000000000000000000000000000000001"), 5, "A"),
            token(address!("0x0000000000000000000000000000000000000002"), 1402, "B"),
            token(address!("0x0000000000000000000000000000000000000003"), 5, "C"),
            token(address!("0x0000000000000000000000000000000000000004"), 5, "D"),
        ])
    }

    #[test]
    fn test_bundled_table_parses() {
        let table = Erc20Table::bundled().unwrap();
        assert!(!table.is_empty());
        assert!(table.tokens().iter().all(|t| !t.is_native()));
    }

    #[tokio::test]
    async fn test_chain_tokens_order() {
        let chain = offline_chain(ChainKey::Ethereum, 5);

        let tokens = get_chain_tokens(&chain, &table(), &NoCleanup);
        let symbols: Vec<_> = tokens.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["ETH", "A", "C", "D"]);
        assert!(tokens.iter().all(|t| t.chain_id == 5));
    }

    #[tokio::test]
    async fn test_chain_tokens_unknown_chain() {
        let chain = offline_chain(ChainKey::PolygonHermez, 999);

        let tokens = get_chain_tokens(&chain, &table(), &NoCleanup);
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_native());
        assert_eq!(tokens[0].chain_id, 999);
    }

    #[tokio::test]
    async fn test_chain_tokens_with_storage_cleanup() {
        let chain = offline_chain(ChainKey::Ethereum, 5);
        let listed = token(address!("0x0000000000000000000000000000000000000003"), 5, "C");
        let custom = token(address!("0x00000000000000000000000000000000000000ff"), 5, "X");
        let storage = MemoryStorage::with_tokens(vec![listed, custom.clone()]);

        let tokens = get_chain_tokens(&chain, &table(), &storage);

        assert!(tokens[0].is_native());
        assert_eq!(tokens.len(), 4);
        assert_eq!(storage.get_custom_tokens().unwrap(), vec![custom]);
    }

    #[tokio::test]
    async fn test_bundled_tokens_keep_table_order() {
        let table = Erc20Table::bundled().unwrap();
        let chain = offline_chain(ChainKey::Ethereum, 1);

        let expected: Vec<_> = table.tokens_for_chain(1).cloned().collect();
        let tokens = get_chain_tokens(&chain, &table, &NoCleanup);
        assert_eq!(&tokens[1..], expected.as_slice());
    }
}
