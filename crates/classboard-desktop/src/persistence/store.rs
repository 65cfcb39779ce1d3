//! String-keyed storage backends

use std::collections::HashMap;
use crate::error::BoardError;

/// Minimal key/value store the persistence bridge writes to
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, BoardError>;

    /// Store `value` under `key`, overwriting any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), BoardError>;
}

/// In-memory store for native hosts and tests
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BoardError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BoardError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
