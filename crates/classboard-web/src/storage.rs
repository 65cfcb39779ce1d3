//! `window.localStorage` as a key/value store

use classboard_desktop::{BoardError, KeyValueStore};
use wasm_bindgen::JsValue;

/// Store backed by the page's local storage
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    /// Open the window's local storage
    pub fn open() -> Result<Self, BoardError> {
        let window = web_sys::window().ok_or_else(|| BoardError::StorageUnavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|err| BoardError::StorageUnavailable(js_message(err)))?
            .ok_or_else(|| BoardError::StorageUnavailable("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }

    /// Remove the value stored under `key`
    pub fn remove(&self, key: &str) -> Result<(), BoardError> {
        self.storage
            .remove_item(key)
            .map_err(|err| BoardError::StorageWrite(js_message(err)))
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, BoardError> {
        self.storage
            .get_item(key)
            .map_err(|err| BoardError::StorageRead(js_message(err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BoardError> {
        // Throws QuotaExceededError when the record does not fit
        self.storage
            .set_item(key, value)
            .map_err(|err| BoardError::StorageWrite(js_message(err)))
    }
}

fn js_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
