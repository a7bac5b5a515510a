//! Canonical collection of open window records.

use crate::model::{WindowConfig, WindowId, WindowRecord};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Open windows keyed by id, kept in insertion order.
///
/// Ordering and activity are owned elsewhere; the registry only answers "which windows exist".
pub struct WindowRegistry {
    records: Vec<WindowRecord>,
}

impl WindowRegistry {
    /// Inserts a record for `config` unless one with the same id already exists.
    ///
    /// Returns `true` when a new record was inserted. An existing record is left untouched.
    pub fn open(&mut self, config: WindowConfig) -> bool {
        if self.exists(&config.id) {
            return false;
        }
        self.records.push(config.into());
        true
    }

    /// Removes the record for `id`. Returns `true` when a record was removed.
    pub fn close(&mut self, id: &WindowId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| &record.id != id);
        self.records.len() != before
    }

    pub fn exists(&self, id: &WindowId) -> bool {
        self.records.iter().any(|record| &record.id == id)
    }

    pub fn get(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.records.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &WindowId> {
        self.records.iter().map(|record| &record.id)
    }
}
