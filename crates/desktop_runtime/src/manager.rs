//! Explicit window/session manager handle used by presentation code and tests.

use leptos::logging;
use platform_host::SessionStore;

use crate::{
    effect_executor,
    model::{DesktopState, WindowConfig, WindowId},
    pages::PageId,
    reducer::{reduce_desktop, DesktopAction},
};

/// Owns the desktop state and the session store its effects write to.
///
/// Every operation is one reducer transition followed by best-effort effect execution.
#[derive(Debug)]
pub struct DesktopManager<S: SessionStore> {
    state: DesktopState,
    store: S,
}

impl<S: SessionStore> DesktopManager<S> {
    /// Creates an empty manager without reading persisted state.
    pub fn new(store: S) -> Self {
        Self {
            state: DesktopState::default(),
            store,
        }
    }

    /// Creates a manager and re-enters split view when a snap session survived a reload.
    pub fn boot(store: S) -> Self {
        let mut manager = Self::new(store);
        if let Some(action) = effect_executor::boot_hydration_action(&manager.store) {
            manager.dispatch(action);
        }
        manager
    }

    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn dispatch(&mut self, action: DesktopAction) {
        let effects = reduce_desktop(&mut self.state, action);
        effect_executor::run_runtime_effects(&self.store, effects);
    }

    pub fn open_window(&mut self, config: WindowConfig) {
        self.dispatch(DesktopAction::OpenWindow(config));
    }

    pub fn close_window(&mut self, window_id: impl Into<WindowId>) {
        self.dispatch(DesktopAction::CloseWindow {
            window_id: window_id.into(),
        });
    }

    pub fn minimize_window(&mut self, window_id: impl Into<WindowId>) {
        self.dispatch(DesktopAction::MinimizeWindow {
            window_id: window_id.into(),
        });
    }

    pub fn restore_window(&mut self, window_id: impl Into<WindowId>) {
        self.dispatch(DesktopAction::RestoreWindow {
            window_id: window_id.into(),
        });
    }

    pub fn set_active_window(&mut self, window_id: impl Into<WindowId>) {
        self.dispatch(DesktopAction::SetActiveWindow {
            window_id: window_id.into(),
        });
    }

    pub fn bring_window_to_front(&mut self, window_id: impl Into<WindowId>) {
        self.dispatch(DesktopAction::BringWindowToFront {
            window_id: window_id.into(),
        });
    }

    pub fn toggle_taskbar_window(&mut self, window_id: impl Into<WindowId>) {
        self.dispatch(DesktopAction::ToggleTaskbarWindow {
            window_id: window_id.into(),
        });
    }

    pub fn minimize_all_windows(&mut self) {
        self.dispatch(DesktopAction::MinimizeAllWindows);
    }

    pub fn restore_all_windows(&mut self) {
        self.dispatch(DesktopAction::RestoreAllWindows);
    }

    pub fn toggle_show_desktop(&mut self) {
        self.dispatch(DesktopAction::ToggleShowDesktop);
    }

    /// Pairs the assistant with the window for `page`.
    ///
    /// Returns `false` for unknown pages (no state change) and for `home`, which shows the
    /// desktop instead of snapping.
    pub fn snap_with_ai(&mut self, page: &str) -> bool {
        dispatch_snap_request(page, |action| self.dispatch(action))
    }

    /// Leaves split view. Returns `false` when split view was not active.
    pub fn exit_snapped_mode(&mut self) -> bool {
        if !self.state.is_ai_snapped() {
            return false;
        }
        self.dispatch(DesktopAction::ExitSnappedMode);
        true
    }

    pub fn toggle_start_menu(&mut self) {
        self.dispatch(DesktopAction::ToggleStartMenu);
    }

    pub fn close_start_menu(&mut self) {
        self.dispatch(DesktopAction::CloseStartMenu);
    }
}

/// Resolves a snap request for `page` and hands the resulting action to `dispatch`.
///
/// Content pages dispatch [`DesktopAction::SnapWithAi`] and return `true`. `home` dispatches
/// [`DesktopAction::MinimizeAllWindows`] and returns `false`. Unknown pages dispatch nothing.
pub(crate) fn dispatch_snap_request(page: &str, dispatch: impl FnOnce(DesktopAction)) -> bool {
    match page.parse::<PageId>() {
        Ok(PageId::Content(page)) => {
            dispatch(DesktopAction::SnapWithAi { page });
            true
        }
        Ok(PageId::Home) => {
            dispatch(DesktopAction::MinimizeAllWindows);
            false
        }
        Err(err) => {
            logging::warn!("snap request ignored: {err}");
            false
        }
    }
}
