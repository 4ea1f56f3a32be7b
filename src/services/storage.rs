use anyhow::{anyhow, Result};
use serde::Deserialize;
use web_sys::window;

/// String key-value persistence, shaped after `window.localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;

    /// Missing keys and undecodable values both come back as `None`.
    fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let json = self.get_item(key)?;
        serde_json::from_str(&json).ok()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let storage = Self::storage().ok_or_else(|| anyhow!("localStorage is unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|e| anyhow!("failed to write {}: {:?}", key, e))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let storage = Self::storage().ok_or_else(|| anyhow!("localStorage is unavailable"))?;
        storage
            .remove_item(key)
            .map_err(|e| anyhow!("failed to remove {}: {:?}", key, e))
    }
}
