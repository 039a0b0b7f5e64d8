// Villa Catalog — Persistence Channels
//
// The abstract key-value text channel behind both persistence surfaces
// (address-encoded filter state, favorites set), with an in-memory adapter
// for tests and ephemeral sessions and a JSON-file adapter for durable
// storage.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::CatalogError;

/// A synchronous key-value text channel.
///
/// Both stores write through a channel on every mutation and rehydrate from
/// it on construction. Reads are infallible: a channel that cannot produce
/// a value reports it as absent, and the caller falls back to defaults.
pub trait StateChannel {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn store(&mut self, key: &str, value: &str) -> Result<(), CatalogError>;
}

/// In-memory channel. State lives only as long as the session.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    entries: HashMap<String, String>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateChannel for MemoryChannel {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), CatalogError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Durable channel backed by a single JSON object file mapping keys to
/// string values.
///
/// A missing or malformed file reads as an empty channel rather than an
/// error; writes rewrite the whole file.
#[derive(Debug, Clone)]
pub struct FileChannel {
    path: PathBuf,
}

impl FileChannel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> HashMap<String, String> {
        let Ok(json) = std::fs::read_to_string(&self.path) else {
            return HashMap::new();
        };
        serde_json::from_str(&json).unwrap_or_default()
    }
}

impl StateChannel for FileChannel {
    fn load(&self, key: &str) -> Option<String> {
        self.read_entries().remove(key)
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), CatalogError> {
        let mut entries = self.read_entries();
        entries.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
