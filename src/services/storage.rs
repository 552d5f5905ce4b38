// ============================================================================
// STORAGE - Key-value persistence behind a trait
// ============================================================================
// The session and theme stores only ever need get/set/remove on string keys,
// so they talk to this trait and unit tests swap in MemoryStorage instead of
// a real browser localStorage.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use web_sys::window;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// localStorage-backed store used in the running app.
#[derive(Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = Self::local_storage().ok_or("localStorage unavailable")?;
        storage
            .set_item(key, value)
            .map_err(|_| "failed to write localStorage".to_string())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let storage = Self::local_storage().ok_or("localStorage unavailable")?;
        storage
            .remove_item(key)
            .map_err(|_| "failed to remove from localStorage".to_string())
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips() {
        let store = MemoryStorage::new();
        assert!(store.get("k").is_none());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert!(store.get("k").is_none());
    }
}
