//! Reactive runtime wiring for Leptos views.
//!
//! [`DesktopRuntimeContext`] holds the desktop state in a signal and the session store in a
//! stored value. It is `Copy`, so views receive it as an explicit prop instead of looking it up
//! from ambient context.

use std::rc::Rc;

use leptos::*;
use platform_host::SessionStore;

use crate::{
    effect_executor,
    manager::dispatch_snap_request,
    model::{DesktopState, WindowId},
    reducer::{reduce_desktop, DesktopAction},
};

#[derive(Clone, Copy)]
/// Reactive handle for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    store: StoredValue<Rc<dyn SessionStore>>,
}

impl DesktopRuntimeContext {
    /// Creates the runtime inside the current reactive owner and hydrates any persisted snap
    /// session.
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        let runtime = Self {
            state: create_rw_signal(DesktopState::default()),
            store: store_value(store),
        };
        let boot = runtime
            .store
            .with_value(|store| effect_executor::boot_hydration_action(store));
        if let Some(action) = boot {
            runtime.dispatch_action(action);
        }
        runtime
    }

    /// Runs one reducer transition, publishes the new state, then executes its effects.
    ///
    /// Effects are executed inline against the session store, so they have landed by the time
    /// this returns.
    pub fn dispatch_action(&self, action: DesktopAction) {
        let mut desktop = self.state.get_untracked();
        let previous = desktop.clone();
        let effects = reduce_desktop(&mut desktop, action);
        if desktop != previous {
            self.state.set(desktop);
        }
        if !effects.is_empty() {
            self.store
                .with_value(|store| effect_executor::run_runtime_effects(store, effects));
        }
    }

    /// See [`crate::DesktopManager::snap_with_ai`].
    pub fn snap_with_ai(&self, page: &str) -> bool {
        dispatch_snap_request(page, |action| self.dispatch_action(action))
    }

    /// See [`crate::DesktopManager::exit_snapped_mode`].
    pub fn exit_snapped_mode(&self) -> bool {
        if !self.state.with_untracked(DesktopState::is_ai_snapped) {
            return false;
        }
        self.dispatch_action(DesktopAction::ExitSnappedMode);
        true
    }

    /// Tracked read of the active window id.
    pub fn active_window_id(&self) -> Option<WindowId> {
        self.state.with(|state| state.active_window_id().cloned())
    }

    /// Tracked read of the split-view flag.
    pub fn is_ai_snapped(&self) -> bool {
        self.state.with(DesktopState::is_ai_snapped)
    }

    /// Tracked read of a window's z-index.
    pub fn z_index_of(&self, window_id: &WindowId) -> u32 {
        self.state.with(|state| state.z_index_of(window_id))
    }
}
