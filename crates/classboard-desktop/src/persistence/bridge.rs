//! Persistence bridge between the board and a key/value store

use tracing::info;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::math::Size;
use super::decode::decode_state;
use super::{DashboardState, KeyValueStore};

/// Saves and loads the dashboard under a single fixed key
#[derive(Clone, Debug)]
pub struct PersistenceBridge {
    key: String,
    base_z: i64,
    min_size: Size,
}

impl Default for PersistenceBridge {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

impl PersistenceBridge {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            key: config.storage_key.clone(),
            base_z: config.base_z,
            min_size: config.min_size,
        }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Serialize `state` and overwrite the stored record
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S, state: &DashboardState) -> Result<(), BoardError> {
        let json = serde_json::to_string(state)?;
        store.set(&self.key, &json)?;
        info!(key = %self.key, widgets = state.widgets.len(), "dashboard saved");
        Ok(())
    }

    /// Read the stored record.
    ///
    /// `Ok(None)` means nothing has been saved yet. Older records are
    /// migrated to the current version before they are returned.
    pub fn load<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<Option<DashboardState>, BoardError> {
        let Some(json) = store.get(&self.key)? else {
            info!(key = %self.key, "no saved dashboard");
            return Ok(None);
        };

        let mut state = self.decode(&json)?;
        if state.needs_migration() {
            state.migrate();
        }
        info!(key = %self.key, widgets = state.widgets.len(), "dashboard loaded");
        Ok(Some(state))
    }

    /// Decode a record without touching a store
    pub fn decode(&self, json: &str) -> Result<DashboardState, BoardError> {
        decode_state(json, self.base_z, self.min_size)
    }
}
