use crate::app_lib::AppError;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// String key-value persistence (get/set/remove by key).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// In-process store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage`. Every call re-resolves the storage object, so a
/// write from another tab is visible on the next read.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, AppError> {
        web_sys::window()
            .ok_or_else(|| AppError::Storage("No window available".to_string()))?
            .local_storage()
            .map_err(|_| AppError::Storage("Local storage is blocked".to_string()))?
            .ok_or_else(|| AppError::Storage("Local storage is unavailable".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| AppError::Storage(format!("Failed to read {key}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("Failed to write {key}")))
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| AppError::Storage(format!("Failed to remove {key}")))
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryStore};
    use crate::app_lib::AppError;

    #[test]
    fn memory_store_get_set_remove() -> Result<(), AppError> {
        let store = MemoryStore::new();
        assert_eq!(store.get("user")?, None);

        store.set("user", "{}")?;
        assert_eq!(store.get("user")?, Some("{}".to_string()));

        store.remove("user")?;
        assert_eq!(store.get("user")?, None);
        // Removing a missing key is not an error.
        store.remove("user")?;
        Ok(())
    }

    #[test]
    fn clones_share_entries() -> Result<(), AppError> {
        let store = MemoryStore::new();
        let other_tab = store.clone();

        other_tab.set("user", "x")?;

        assert_eq!(store.get("user")?, Some("x".to_string()));
        Ok(())
    }
}
