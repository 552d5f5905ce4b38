// ============================================================================
// THEME STORE - dark/light preference, persisted and mirrored to the DOM
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::services::KeyValueStore;

pub const THEME_STORAGE_KEY: &str = "bus_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    fn parse(value: &str) -> Theme {
        match value {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn other(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Clone)]
pub struct ThemeStore {
    storage: Rc<dyn KeyValueStore>,
    current: Rc<Cell<Theme>>,
}

impl ThemeStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let current = storage
            .get(THEME_STORAGE_KEY)
            .map(|v| Theme::parse(&v))
            .unwrap_or(Theme::Dark);
        Self {
            storage,
            current: Rc::new(Cell::new(current)),
        }
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current.get().other();
        self.current.set(next);
        if let Err(e) = self.storage.set(THEME_STORAGE_KEY, next.as_str()) {
            log::warn!("failed to persist theme: {e}");
        }
        next
    }

    /// Mirror the current theme onto <html data-theme="...">.
    pub fn apply(&self) {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", self.current.get().as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryStorage;

    #[test]
    fn defaults_to_dark() {
        let store = ThemeStore::new(Rc::new(MemoryStorage::new()));
        assert_eq!(store.current(), Theme::Dark);
    }

    #[test]
    fn toggle_persists_preference() {
        let storage: Rc<dyn KeyValueStore> = Rc::new(MemoryStorage::new());
        let store = ThemeStore::new(storage.clone());
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("light"));

        let reloaded = ThemeStore::new(storage);
        assert_eq!(reloaded.current(), Theme::Light);
    }

    #[test]
    fn unknown_stored_value_reads_as_dark() {
        let storage: Rc<dyn KeyValueStore> = Rc::new(MemoryStorage::new());
        storage.set(THEME_STORAGE_KEY, "sepia").unwrap();
        let store = ThemeStore::new(storage);
        assert_eq!(store.current(), Theme::Dark);
    }
}
