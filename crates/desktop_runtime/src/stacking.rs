//! Back-to-front stacking order and z-index derivation.

use crate::model::WindowId;

/// z-index floor. Ids missing from the order resolve to this value; stacked ids sit above it.
pub const BASE_Z_INDEX: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Ordered, duplicate-free sequence of window ids. The tail is the topmost window.
pub struct StackOrder {
    ids: Vec<WindowId>,
}

impl StackOrder {
    /// Moves `id` to the top of the stack, appending it if it is not tracked yet.
    ///
    /// Does not consult the registry: callers raise ids that are open or about to be.
    pub fn bring_to_front(&mut self, id: &WindowId) {
        self.remove(id);
        self.ids.push(id.clone());
    }

    pub fn remove(&mut self, id: &WindowId) {
        self.ids.retain(|tracked| tracked != id);
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.ids.contains(id)
    }

    pub fn z_index_of(&self, id: &WindowId) -> u32 {
        self.ids
            .iter()
            .position(|tracked| tracked == id)
            .map(|idx| BASE_Z_INDEX + idx as u32 + 1)
            .unwrap_or(BASE_Z_INDEX)
    }

    pub fn retain(&mut self, keep: impl FnMut(&WindowId) -> bool) {
        self.ids.retain(keep);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &WindowId> {
        self.ids.iter()
    }

    pub fn as_slice(&self) -> &[WindowId] {
        &self.ids
    }
}
