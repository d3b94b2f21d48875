use std::sync::Mutex;

use super::{cleanup_with_storage, CustomTokenStorage, TokenCleanup};
use crate::domain::Token;
use crate::errors::Result;

/// Custom tokens kept in memory only
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tokens: Mutex<Vec<Token>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens: Mutex::new(tokens),
        }
    }
}

impl CustomTokenStorage for MemoryStorage {
    fn get_custom_tokens(&self) -> Result<Vec<Token>> {
        Ok(self
            .tokens
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }

    fn update(&self, f: &mut dyn FnMut(&mut Vec<Token>) -> bool) -> Result<Vec<Token>> {
        let mut tokens = self.tokens.lock().unwrap_or_else(|e| e.into_inner());
        let mut updated = tokens.clone();
        if f(&mut updated) {
            *tokens = updated;
        }
        Ok(tokens.clone())
    }
}

impl TokenCleanup for MemoryStorage {
    fn cleanup(&self, tokens: Vec<Token>) -> Vec<Token> {
        cleanup_with_storage(self, tokens)
    }
}
