//! Session-scoped key/value storage contracts and in-memory adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::Serialize;

/// Host service for session-scoped string values (JSON stored as text per key).
///
/// Values survive a page reload but not the browser session. Implementations are synchronous;
/// callers treat every write as best-effort.
pub trait SessionStore {
    /// Reads the raw string stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable.
    fn get_raw(&self, key: &str) -> Result<Option<String>, String>;

    /// Stores a raw string under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable or rejects the write.
    fn set_raw(&self, key: &str, raw: &str) -> Result<(), String>;

    /// Removes `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable.
    fn remove(&self, key: &str) -> Result<(), String>;
}

impl<S: SessionStore + ?Sized> SessionStore for Rc<S> {
    fn get_raw(&self, key: &str) -> Result<Option<String>, String> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, raw: &str) -> Result<(), String> {
        (**self).set_raw(key, raw)
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        (**self).remove(key)
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory session store. Clones share the same backing map.
pub struct MemorySessionStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    /// Returns `true` when `key` currently holds a value.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.borrow().contains_key(key)
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns `true` when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn set_raw(&self, key: &str, raw: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Serializes and saves a typed value through a [`SessionStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_session_with<S: SessionStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.set_raw(key, &raw)
}
