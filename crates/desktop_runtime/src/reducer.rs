//! Reducer actions, side-effect intents, and transition logic for the window/session manager.

mod desktop_mode;
mod snap;

use crate::{
    model::{DesktopState, SnapState, WindowConfig, WindowId},
    pages::ContentPage,
    persistence::SnapSession,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Focus the window named by the config, creating it first when it is not open.
    OpenWindow(WindowConfig),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Hide a window without closing it.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Un-minimize a window and make it active without changing the stacking order.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Make a window active without changing the stacking order.
    SetActiveWindow {
        /// Window to activate.
        window_id: WindowId,
    },
    /// Raise and activate a window, leaving "show desktop" mode.
    BringWindowToFront {
        /// Window to raise.
        window_id: WindowId,
    },
    /// Taskbar button behavior: restore if minimized, minimize if active, otherwise raise.
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Minimize every open window and remember what was visible.
    MinimizeAllWindows,
    /// Undo the last [`DesktopAction::MinimizeAllWindows`].
    RestoreAllWindows,
    /// Toggle "show desktop".
    ToggleShowDesktop,
    /// Pair the assistant panel with a page window.
    SnapWithAi {
        /// Page to open beside the assistant.
        page: ContentPage,
    },
    /// Leave split-view mode, restoring the pre-snap layout when one was captured.
    ExitSnappedMode,
    /// Re-enter split-view mode from a session persisted before a reload.
    HydrateSnapSession {
        /// Persisted snap session payload.
        session: SnapSession,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the effect executor to run.
pub enum RuntimeEffect {
    /// Persist the snap session so a reload can re-enter split view.
    PersistSnapSession(SnapSession),
    /// Remove the persisted snap session and the assistant's auxiliary reload keys.
    ClearSnapSession,
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Every action is total: ids that are not open turn the action into a no-op. After the
/// action-specific update a normalization pass recomputes the dependent fields (stacking order,
/// minimized set, active window, snap anchor) so they cannot drift apart.
pub fn reduce_desktop(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();

    if !desktop_mode::reduce_desktop_mode_action(state, &action)
        && !snap::reduce_snap_action(state, &action, &mut effects)
    {
        match action {
            DesktopAction::OpenWindow(config) => open_window(state, config),
            DesktopAction::CloseWindow { window_id } => close_window(state, &window_id),
            DesktopAction::MinimizeWindow { window_id } => {
                if state.registry.exists(&window_id) {
                    state.minimized.insert(window_id.clone());
                    if state.active_window_id.as_ref() == Some(&window_id) {
                        state.active_window_id = None;
                    }
                }
            }
            DesktopAction::RestoreWindow { window_id } => activate_window(state, &window_id),
            DesktopAction::SetActiveWindow { window_id } => activate_window(state, &window_id),
            DesktopAction::ToggleTaskbarWindow { window_id } => {
                toggle_taskbar_window(state, &window_id, &mut effects);
                return effects;
            }
            DesktopAction::ToggleStartMenu => {
                state.start_menu_open = !state.start_menu_open;
            }
            DesktopAction::CloseStartMenu => {
                state.start_menu_open = false;
            }
            DesktopAction::MinimizeAllWindows
            | DesktopAction::RestoreAllWindows
            | DesktopAction::ToggleShowDesktop
            | DesktopAction::BringWindowToFront { .. }
            | DesktopAction::SnapWithAi { .. }
            | DesktopAction::ExitSnappedMode
            | DesktopAction::HydrateSnapSession { .. } => {}
        }
    }

    normalize_desktop(state, &mut effects);
    effects
}

/// Focus-or-create: ensures the window exists, raises it, and makes it active.
pub(crate) fn open_window(state: &mut DesktopState, config: WindowConfig) {
    let window_id = config.id.clone();
    state.registry.open(config);
    state.order.bring_to_front(&window_id);
    state.minimized.remove(&window_id);
    state.active_window_id = Some(window_id);
    desktop_mode::leave_desktop_mode(state);
    state.start_menu_open = false;
}

fn close_window(state: &mut DesktopState, window_id: &WindowId) {
    if !state.registry.close(window_id) {
        return;
    }
    state.order.remove(window_id);
    state.minimized.remove(window_id);
    if state.active_window_id.as_ref() == Some(window_id) {
        state.active_window_id = topmost_visible_window(state);
    }
}

/// Un-minimizes and activates an open window. Stacking is left alone.
fn activate_window(state: &mut DesktopState, window_id: &WindowId) {
    if !state.registry.exists(window_id) {
        return;
    }
    state.minimized.remove(window_id);
    state.active_window_id = Some(window_id.clone());
}

fn toggle_taskbar_window(
    state: &mut DesktopState,
    window_id: &WindowId,
    effects: &mut Vec<RuntimeEffect>,
) {
    if !state.registry.exists(window_id) {
        return;
    }
    let window_id = window_id.clone();
    let next = if state.minimized.contains(&window_id) {
        activate_window(state, &window_id);
        DesktopAction::BringWindowToFront { window_id }
    } else if state.active_window_id.as_ref() == Some(&window_id) {
        DesktopAction::MinimizeWindow { window_id }
    } else {
        DesktopAction::BringWindowToFront { window_id }
    };
    effects.extend(reduce_desktop(state, next));
}

fn topmost_visible_window(state: &DesktopState) -> Option<WindowId> {
    state
        .order
        .iter()
        .rev()
        .find(|id| !state.minimized.contains(*id))
        .cloned()
}

/// Recomputes every field that depends on the set of open windows.
fn normalize_desktop(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    let DesktopState {
        registry,
        order,
        minimized,
        ..
    } = state;
    order.retain(|id| registry.exists(id));
    for id in registry.ids() {
        if !order.contains(id) {
            order.bring_to_front(id);
        }
    }
    minimized.retain(|id| registry.exists(id));

    let active_valid = state
        .active_window_id
        .as_ref()
        .map(|id| state.registry.exists(id) && !state.minimized.contains(id))
        .unwrap_or(true);
    if !active_valid {
        state.active_window_id = None;
    }

    let anchor_gone = match &state.snap {
        SnapState::Free => false,
        SnapState::Snapped { window_id, .. } => {
            !state.registry.exists(window_id) || state.minimized.contains(window_id)
        }
    };
    if anchor_gone {
        state.snap = SnapState::Free;
        effects.push(RuntimeEffect::ClearSnapSession);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::stacking::BASE_Z_INDEX;

    fn id(raw: &str) -> WindowId {
        WindowId::from(raw)
    }

    fn open(state: &mut DesktopState, raw: &str) {
        let effects = reduce_desktop(state, DesktopAction::OpenWindow(WindowConfig::new(raw)));
        assert!(effects.is_empty());
    }

    #[test]
    fn open_window_focuses_new_window_and_updates_stack() {
        let mut state = DesktopState::default();
        open(&mut state, "about");
        open(&mut state, "projects");

        assert_eq!(state.active_window_id(), Some(&id("projects")));
        assert_eq!(state.order(), &[id("about"), id("projects")]);
        assert_eq!(state.z_index_of(&id("projects")), BASE_Z_INDEX + 2);
    }

    #[test]
    fn reopening_focuses_unminimizes_and_raises_without_overwriting() {
        let mut state = DesktopState::default();
        reduce_desktop(
            &mut state,
            DesktopAction::OpenWindow(WindowConfig::new("about").with_title("About Me")),
        );
        open(&mut state, "resume");
        reduce_desktop(
            &mut state,
            DesktopAction::MinimizeWindow {
                window_id: id("about"),
            },
        );
        reduce_desktop(
            &mut state,
            DesktopAction::OpenWindow(WindowConfig::new("about").with_title("Stale")),
        );

        assert_eq!(state.windows().count(), 2);
        assert_eq!(
            state.window(&id("about")).map(|w| w.title.as_str()),
            Some("About Me")
        );
        assert_eq!(state.order(), &[id("resume"), id("about")]);
        assert!(!state.is_minimized(&id("about")));
        assert_eq!(state.active_window_id(), Some(&id("about")));
    }

    #[test]
    fn open_window_closes_start_menu() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu);
        assert!(state.is_start_menu_open());
        open(&mut state, "contact");
        assert!(!state.is_start_menu_open());
    }

    #[test]
    fn closing_active_window_hands_focus_to_topmost_visible_window() {
        let mut state = DesktopState::default();
        open(&mut state, "a");
        open(&mut state, "b");
        open(&mut state, "c");
        reduce_desktop(&mut state, DesktopAction::MinimizeWindow { window_id: id("b") });
        reduce_desktop(&mut state, DesktopAction::BringWindowToFront { window_id: id("c") });

        reduce_desktop(&mut state, DesktopAction::CloseWindow { window_id: id("c") });

        assert_eq!(state.order(), &[id("a"), id("b")]);
        assert_eq!(state.active_window_id(), Some(&id("a")));

        reduce_desktop(&mut state, DesktopAction::CloseWindow { window_id: id("a") });
        assert_eq!(state.active_window_id(), None);
        assert_eq!(state.minimized().len(), 1);
    }

    #[test]
    fn closing_inactive_window_keeps_focus() {
        let mut state = DesktopState::default();
        open(&mut state, "a");
        open(&mut state, "b");
        reduce_desktop(&mut state, DesktopAction::CloseWindow { window_id: id("a") });
        assert_eq!(state.active_window_id(), Some(&id("b")));
    }

    #[test]
    fn minimizing_active_window_clears_focus_without_transfer() {
        let mut state = DesktopState::default();
        open(&mut state, "a");
        open(&mut state, "b");
        reduce_desktop(&mut state, DesktopAction::MinimizeWindow { window_id: id("b") });

        assert!(state.is_minimized(&id("b")));
        assert_eq!(state.active_window_id(), None);
        assert_eq!(state.order(), &[id("a"), id("b")]);
    }

    #[test]
    fn restore_window_activates_without_raising() {
        let mut state = DesktopState::default();
        open(&mut state, "a");
        open(&mut state, "b");
        reduce_desktop(&mut state, DesktopAction::MinimizeWindow { window_id: id("a") });
        reduce_desktop(&mut state, DesktopAction::RestoreWindow { window_id: id("a") });

        assert!(!state.is_minimized(&id("a")));
        assert_eq!(state.active_window_id(), Some(&id("a")));
        assert_eq!(state.order(), &[id("a"), id("b")]);
    }

    #[test]
    fn set_active_window_leaves_order_alone() {
        let mut state = DesktopState::default();
        open(&mut state, "a");
        open(&mut state, "b");
        reduce_desktop(&mut state, DesktopAction::SetActiveWindow { window_id: id("a") });

        assert_eq!(state.active_window_id(), Some(&id("a")));
        assert_eq!(state.order(), &[id("a"), id("b")]);
    }

    #[test]
    fn unknown_ids_are_noops() {
        let mut state = DesktopState::default();
        open(&mut state, "a");
        let before = state.clone();

        for action in [
            DesktopAction::CloseWindow { window_id: id("x") },
            DesktopAction::MinimizeWindow { window_id: id("x") },
            DesktopAction::RestoreWindow { window_id: id("x") },
            DesktopAction::SetActiveWindow { window_id: id("x") },
            DesktopAction::BringWindowToFront { window_id: id("x") },
            DesktopAction::ToggleTaskbarWindow { window_id: id("x") },
        ] {
            assert!(reduce_desktop(&mut state, action).is_empty());
        }
        assert_eq!(state, before);
    }

    #[test]
    fn taskbar_toggle_minimizes_if_active_and_restores_if_minimized() {
        let mut state = DesktopState::default();
        open(&mut state, "a");
        open(&mut state, "b");

        reduce_desktop(&mut state, DesktopAction::ToggleTaskbarWindow { window_id: id("b") });
        assert!(state.is_minimized(&id("b")));
        assert_eq!(state.active_window_id(), None);

        reduce_desktop(&mut state, DesktopAction::ToggleTaskbarWindow { window_id: id("b") });
        assert!(!state.is_minimized(&id("b")));
        assert_eq!(state.active_window_id(), Some(&id("b")));

        reduce_desktop(&mut state, DesktopAction::ToggleTaskbarWindow { window_id: id("a") });
        assert_eq!(state.order(), &[id("b"), id("a")]);
        assert_eq!(state.active_window_id(), Some(&id("a")));
    }

    #[test]
    fn start_menu_toggle_and_close() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu);
        assert!(state.is_start_menu_open());
        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu);
        assert!(!state.is_start_menu_open());
        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu);
        reduce_desktop(&mut state, DesktopAction::CloseStartMenu);
        assert!(!state.is_start_menu_open());
    }
}
