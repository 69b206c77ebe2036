//! Persistent key/value store
//!
//! A small string map saved as a JSON object, used the way a browser uses
//! local storage: convenience values only, never anything that must survive.
//! Opening never fails; a missing, unreadable or corrupt file yields an
//! empty store so callers fall back to their defaults.

use crate::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// JSON-file backed string map
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl LocalStore {
    /// Open the store at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let items = match std::fs::read_to_string(&path) {
            Ok(data) if data.trim().is_empty() => BTreeMap::new(),
            Ok(data) => match serde_json::from_str(&data) {
                Ok(items) => items,
                Err(e) => {
                    warn!("Ignoring corrupt local storage at {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("Failed to read local storage at {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };

        Self { path, items }
    }

    /// Path backing this store
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a stored value
    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Store a value and write the file
    ///
    /// The in-memory value is updated even when the write fails.
    pub fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.persist()
    }

    /// Remove a value and write the file
    pub fn remove_item(&mut self, key: &str) -> Result<()> {
        if self.items.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("Failed to create storage directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(&self.items)?;
        std::fs::write(&self.path, json)
            .map_err(|e| Error::Storage(format!("Failed to write local storage: {}", e)))?;

        debug!("Saved local storage to {}", self.path.display());
        Ok(())
    }
}
