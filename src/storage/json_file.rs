use log::debug;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

use super::{cleanup_with_storage, CustomTokenStorage, TokenCleanup};
use crate::domain::Token;
use crate::errors::Result;

/// Custom tokens persisted as a JSON array in a file.
/// A missing file reads as an empty list.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<Token>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Vec::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, tokens: &[Token]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;
        // Write beside the target and rename so readers never see a partial file
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(serde_json::to_string_pretty(tokens)?.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        debug!("Wrote {} custom tokens to {}", tokens.len(), self.path.display());
        Ok(())
    }
}

impl CustomTokenStorage for JsonFileStorage {
    fn get_custom_tokens(&self) -> Result<Vec<Token>> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.read()
    }

    fn update(&self, f: &mut dyn FnMut(&mut Vec<Token>) -> bool) -> Result<Vec<Token>> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut tokens = self.read()?;
        if f(&mut tokens) {
            self.write(&tokens)?;
        }
        Ok(tokens)
    }
}

impl TokenCleanup for JsonFileStorage {
    fn cleanup(&self, tokens: Vec<Token>) -> Vec<Token> {
        cleanup_with_storage(self, tokens)
    }
}
