//! Reducer helpers for "show desktop" and direct window raising.

use crate::{
    model::{DesktopModeSnapshot, DesktopState},
    reducer::DesktopAction,
};

pub(super) fn reduce_desktop_mode_action(state: &mut DesktopState, action: &DesktopAction) -> bool {
    match action {
        DesktopAction::MinimizeAllWindows => minimize_all_windows(state),
        DesktopAction::RestoreAllWindows => restore_all_windows(state),
        DesktopAction::ToggleShowDesktop => {
            if state.desktop_mode {
                restore_all_windows(state);
            } else {
                minimize_all_windows(state);
            }
        }
        DesktopAction::BringWindowToFront { window_id } => {
            if state.registry.exists(window_id) {
                state.order.bring_to_front(window_id);
                state.minimized.remove(window_id);
                state.active_window_id = Some(window_id.clone());
                leave_desktop_mode(state);
            }
        }
        _ => return false,
    }
    true
}

pub(crate) fn minimize_all_windows(state: &mut DesktopState) {
    let non_minimized_window_ids = state
        .order
        .iter()
        .filter(|id| !state.minimized.contains(*id))
        .cloned()
        .collect();
    state.desktop_snapshot = Some(DesktopModeSnapshot {
        active_window_id: state.active_window_id.clone(),
        non_minimized_window_ids,
    });
    state.minimized.extend(state.registry.ids().cloned());
    state.active_window_id = None;
    state.desktop_mode = true;
}

/// Un-minimizes exactly what "show desktop" hid. Windows minimized beforehand stay minimized.
fn restore_all_windows(state: &mut DesktopState) {
    if let Some(snapshot) = state.desktop_snapshot.take() {
        for id in &snapshot.non_minimized_window_ids {
            state.minimized.remove(id);
        }
        state.active_window_id = snapshot
            .active_window_id
            .filter(|id| state.registry.exists(id));
    }
    state.desktop_mode = false;
}

/// Any direct window interaction ends "show desktop"; the stale snapshot is dropped with it.
pub(crate) fn leave_desktop_mode(state: &mut DesktopState) {
    state.desktop_mode = false;
    state.desktop_snapshot = None;
}
