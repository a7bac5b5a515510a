//! Session-scoped persistence for the split-view mode.
//!
//! Only one small struct survives a reload: whether the assistant was snapped and to which window.
//! Writes are best-effort; the in-memory state never depends on them succeeding.

use platform_host::{save_session_with, SessionStore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::WindowId;

/// Session key holding the serialized [`SnapSession`].
pub const SNAP_SESSION_KEY: &str = "desktop.snap_session.v1";
/// Highlighted-line marker written by the assistant's deep-link highlighter.
pub const HIGHLIGHT_LINE_KEY: &str = "highlightLine";
/// Chat transcript preserved across the reload that enters split view.
pub const PRESERVED_CHAT_STATE_KEY: &str = "preservedChatState";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Persisted subset of the snap state.
pub struct SnapSession {
    pub is_snapped: bool,
    pub window_id: WindowId,
}

impl SnapSession {
    pub fn snapped(window_id: WindowId) -> Self {
        Self {
            is_snapped: true,
            window_id,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures talking to the session store.
pub enum PersistenceError {
    #[error("session store failed: {0}")]
    Store(String),
    #[error("persisted snap session is malformed: {0}")]
    Decode(String),
}

/// Loads the persisted snap session, if any.
///
/// # Errors
///
/// Returns [`PersistenceError::Store`] when the store read fails and
/// [`PersistenceError::Decode`] when the stored payload is not a snap session.
pub fn load_snap_session<S: SessionStore + ?Sized>(
    store: &S,
) -> Result<Option<SnapSession>, PersistenceError> {
    let raw = store
        .get_raw(SNAP_SESSION_KEY)
        .map_err(PersistenceError::Store)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| PersistenceError::Decode(e.to_string()))
}

/// Persists `session` under [`SNAP_SESSION_KEY`].
///
/// # Errors
///
/// Returns [`PersistenceError::Store`] when serialization or the store write fails.
pub fn save_snap_session<S: SessionStore + ?Sized>(
    store: &S,
    session: &SnapSession,
) -> Result<(), PersistenceError> {
    save_session_with(store, SNAP_SESSION_KEY, session).map_err(PersistenceError::Store)
}

/// Removes the snap session and the assistant's auxiliary reload keys.
///
/// Every key is attempted even when an earlier removal fails; the first failure is reported.
///
/// # Errors
///
/// Returns [`PersistenceError::Store`] when any removal fails.
pub fn clear_snap_session<S: SessionStore + ?Sized>(store: &S) -> Result<(), PersistenceError> {
    [SNAP_SESSION_KEY, HIGHLIGHT_LINE_KEY, PRESERVED_CHAT_STATE_KEY]
        .into_iter()
        .map(|key| store.remove(key))
        .fold(Ok(()), |acc, result| acc.and(result))
        .map_err(PersistenceError::Store)
}

#[cfg(test)]
mod tests {
    use platform_host::MemorySessionStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn snap_session_round_trips_with_camel_case_keys() {
        let store = MemorySessionStore::default();
        save_snap_session(&store, &SnapSession::snapped(WindowId::from("about"))).expect("save");

        assert_eq!(
            store.get_raw(SNAP_SESSION_KEY).expect("raw"),
            Some("{\"isSnapped\":true,\"windowId\":\"about\"}".to_string())
        );
        assert_eq!(
            load_snap_session(&store).expect("load"),
            Some(SnapSession::snapped(WindowId::from("about")))
        );
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let store = MemorySessionStore::default();
        store.set_raw(SNAP_SESSION_KEY, "{\"isSnapped\":1}").expect("set");
        assert!(matches!(
            load_snap_session(&store),
            Err(PersistenceError::Decode(_))
        ));
    }

    #[test]
    fn clear_removes_snap_and_auxiliary_keys_only() {
        let store = MemorySessionStore::default();
        save_snap_session(&store, &SnapSession::snapped(WindowId::from("resume"))).expect("save");
        store.set_raw(HIGHLIGHT_LINE_KEY, "\"line-4\"").expect("set");
        store
            .set_raw(PRESERVED_CHAT_STATE_KEY, "{\"messages\":[]}")
            .expect("set");
        store.set_raw("unrelated", "1").expect("set");

        clear_snap_session(&store).expect("clear");

        assert_eq!(load_snap_session(&store).expect("load"), None);
        assert!(!store.contains(HIGHLIGHT_LINE_KEY));
        assert!(!store.contains(PRESERVED_CHAT_STATE_KEY));
        assert!(store.contains("unrelated"));
    }
}
