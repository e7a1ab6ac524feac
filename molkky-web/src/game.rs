//! Web-specific bindings for the rules engine
//!
//! Re-exports the molkky-game types and provides the browser persistence
//! layer: one JSON snapshot in `sessionStorage`, gone when the tab closes.

use serde::de::DeserializeOwned;
use serde::Serialize;

// Re-export all types from molkky-game
pub use molkky_game::*;

/// Fixed storage key for the whole session snapshot.
pub const SESSION_KEY: &str = "molkky.session.v1";

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Session persistence backed by the browser's `sessionStorage`.
pub struct WebSnapshotStore;

impl WebSnapshotStore {
    fn write<T: Serialize>(key: &str, value: &T) -> Result<(), WebStorageError> {
        let json = serde_json::to_string(value)?;
        let storage = crate::dom::session_storage()
            .map_err(|e| WebStorageError::Storage(crate::dom::js_error_message(&e)))?;
        storage
            .set_item(key, &json)
            .map_err(|e| WebStorageError::Storage(crate::dom::js_error_message(&e)))
    }

    fn read<T: DeserializeOwned>(key: &str) -> Result<Option<T>, WebStorageError> {
        let storage = crate::dom::session_storage()
            .map_err(|e| WebStorageError::Storage(crate::dom::js_error_message(&e)))?;
        let raw = storage
            .get_item(key)
            .map_err(|e| WebStorageError::Storage(crate::dom::js_error_message(&e)))?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

impl SnapshotStore for WebSnapshotStore {
    type Error = WebStorageError;

    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), Self::Error> {
        Self::write(SESSION_KEY, snapshot)
    }

    fn load(&self) -> Result<Option<SessionSnapshot>, Self::Error> {
        Self::read(SESSION_KEY)
    }

    fn clear(&self) -> Result<(), Self::Error> {
        let storage = crate::dom::session_storage()
            .map_err(|e| WebStorageError::Storage(crate::dom::js_error_message(&e)))?;
        storage
            .remove_item(SESSION_KEY)
            .map_err(|e| WebStorageError::Storage(crate::dom::js_error_message(&e)))
    }
}

/// Create the session manager used by the app shell.
#[must_use]
pub const fn create_session_manager() -> SessionManager<WebSnapshotStore> {
    SessionManager::new(WebSnapshotStore)
}

/// Persist the given pieces as the current session, logging failures.
pub fn persist_session(game: &GameState, history: &GameHistory) {
    let snapshot = SessionSnapshot::new(Some(game.clone()), history.clone());
    if let Err(err) = create_session_manager().save(&snapshot) {
        log::warn!("failed to persist session: {err}");
    }
}
