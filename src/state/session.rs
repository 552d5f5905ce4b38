// ============================================================================
// SESSION STORE - Persisted {role, passenger} belief
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{AuthSession, LoginResponse, Passenger, Role};
use crate::services::KeyValueStore;

pub const SESSION_STORAGE_KEY: &str = "bus_auth_state_v1";

/// Holds the current actor's role and profile and writes every transition
/// straight through to storage. Corrupt or missing storage loads as GUEST.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
    current: Rc<RefCell<AuthSession>>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let current = Self::load(storage.as_ref());
        Self {
            storage,
            current: Rc::new(RefCell::new(current)),
        }
    }

    fn load(storage: &dyn KeyValueStore) -> AuthSession {
        let Some(raw) = storage.get(SESSION_STORAGE_KEY) else {
            return AuthSession::default();
        };
        match serde_json::from_str::<AuthSession>(&raw) {
            // Re-assert the invariant in case old storage predates it.
            Ok(session) if session.role == Role::Passenger => session,
            Ok(session) => AuthSession {
                role: session.role,
                passenger: None,
            },
            Err(e) => {
                log::warn!("discarding corrupt session state: {e}");
                AuthSession::default()
            }
        }
    }

    fn persist(&self) {
        let snapshot = self.current.borrow().clone();
        match serde_json::to_string(&snapshot) {
            Ok(json) => {
                if let Err(e) = self.storage.set(SESSION_STORAGE_KEY, &json) {
                    log::error!("failed to persist session: {e}");
                }
            }
            Err(e) => log::error!("failed to serialize session: {e}"),
        }
    }

    /// Adopt a backend login payload. Unknown roles reset to GUEST.
    pub fn set_logged_in(&self, payload: &LoginResponse) {
        *self.current.borrow_mut() = AuthSession::from_login(payload);
        self.persist();
    }

    /// Reset to GUEST without touching the network.
    pub fn clear_auth(&self) {
        *self.current.borrow_mut() = AuthSession::default();
        self.persist();
    }

    pub fn role(&self) -> Role {
        self.current.borrow().role
    }

    pub fn passenger(&self) -> Option<Passenger> {
        self.current.borrow().passenger.clone()
    }

    pub fn snapshot(&self) -> AuthSession {
        self.current.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryStorage;

    fn passenger_payload() -> LoginResponse {
        LoginResponse {
            role: "PASSENGER".to_string(),
            passenger: Some(Passenger {
                id: 1,
                name: "A".to_string(),
                email: None,
                phone: None,
            }),
        }
    }

    #[test]
    fn round_trips_through_storage() {
        let storage: Rc<dyn KeyValueStore> = Rc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        store.set_logged_in(&passenger_payload());

        // Fresh store over the same backing storage sees the same session.
        let reloaded = SessionStore::new(storage);
        assert_eq!(reloaded.role(), Role::Passenger);
        assert_eq!(reloaded.snapshot(), store.snapshot());
        assert_eq!(reloaded.passenger().unwrap().name, "A");
    }

    #[test]
    fn bogus_role_yields_guest() {
        let store = SessionStore::new(Rc::new(MemoryStorage::new()));
        store.set_logged_in(&LoginResponse {
            role: "BOGUS".to_string(),
            passenger: None,
        });
        assert_eq!(store.role(), Role::Guest);
        assert!(store.passenger().is_none());
    }

    #[test]
    fn corrupt_storage_falls_back_to_guest() {
        let storage: Rc<dyn KeyValueStore> = Rc::new(MemoryStorage::new());
        storage.set(SESSION_STORAGE_KEY, "{not json").unwrap();
        let store = SessionStore::new(storage);
        assert_eq!(store.role(), Role::Guest);
    }

    #[test]
    fn clear_auth_resets_and_persists() {
        let storage: Rc<dyn KeyValueStore> = Rc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        store.set_logged_in(&passenger_payload());
        store.clear_auth();

        assert_eq!(store.role(), Role::Guest);
        let reloaded = SessionStore::new(storage);
        assert_eq!(reloaded.role(), Role::Guest);
        assert!(reloaded.passenger().is_none());
    }

    #[test]
    fn stale_non_passenger_profile_is_dropped_on_load() {
        let storage: Rc<dyn KeyValueStore> = Rc::new(MemoryStorage::new());
        storage
            .set(
                SESSION_STORAGE_KEY,
                r#"{"role":"ADMIN","passenger":{"id":1,"name":"A"}}"#,
            )
            .unwrap();
        let store = SessionStore::new(storage);
        assert_eq!(store.role(), Role::Admin);
        assert!(store.passenger().is_none());
    }
}
