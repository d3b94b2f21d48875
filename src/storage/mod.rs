//! Persistence of user-added custom tokens and the cleanup step applied to
//! every assembled token list.

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use log::{info, warn};
use std::collections::HashSet;

use crate::domain::Token;
use crate::errors::Result;

/// Post-processing applied to a chain's token list before it is handed out
pub trait TokenCleanup {
    fn cleanup(&self, tokens: Vec<Token>) -> Vec<Token>;
}

/// Leaves token lists untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCleanup;

impl TokenCleanup for NoCleanup {
    fn cleanup(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
    }
}

/// Store of the custom tokens a user added on top of the bundled lists
pub trait CustomTokenStorage: Send + Sync {
    fn get_custom_tokens(&self) -> Result<Vec<Token>>;

    /// Applies `f` to the stored tokens under the store's lock and returns the
    /// resulting list. The store is only written when `f` returns `true`.
    fn update(&self, f: &mut dyn FnMut(&mut Vec<Token>) -> bool) -> Result<Vec<Token>>;

    fn add_custom_token(&self, token: Token) -> Result<Vec<Token>> {
        self.update(&mut |custom: &mut Vec<Token>| {
            if custom.iter().any(|t| t.key() == token.key()) {
                return false;
            }
            custom.push(token.clone());
            true
        })
    }

    fn remove_custom_token(&self, token: &Token) -> Result<Vec<Token>> {
        self.update(&mut |custom: &mut Vec<Token>| {
            let before = custom.len();
            custom.retain(|t| t.key() != token.key());
            custom.len() != before
        })
    }

    /// Drops every stored custom token that `tokens` already lists and returns
    /// the custom tokens left.
    fn cleanup_custom_tokens(&self, tokens: &[Token]) -> Result<Vec<Token>> {
        let listed: HashSet<_> = tokens.iter().map(Token::key).collect();
        let mut removed = 0;
        let remaining = self.update(&mut |custom: &mut Vec<Token>| {
            let before = custom.len();
            custom.retain(|t| !listed.contains(&t.key()));
            removed = before - custom.len();
            removed > 0
        })?;
        if removed > 0 {
            info!("Removed {} custom tokens already present in token list", removed);
        }
        Ok(remaining)
    }
}

/// Removes repeated `(address, chain_id)` entries, keeping the first occurrence
pub fn dedup_tokens(mut tokens: Vec<Token>) -> Vec<Token> {
    let mut seen = HashSet::new();
    tokens.retain(|t| seen.insert(t.key()));
    tokens
}

/// Cleanup shared by every storage backend. Storage failures are logged and
/// never fail the token list.
pub(crate) fn cleanup_with_storage<S: CustomTokenStorage + ?Sized>(
    storage: &S,
    tokens: Vec<Token>,
) -> Vec<Token> {
    if let Err(e) = storage.cleanup_custom_tokens(&tokens) {
        warn!("Failed to clean up custom tokens: {}", e);
    }
    dedup_tokens(tokens)
}
