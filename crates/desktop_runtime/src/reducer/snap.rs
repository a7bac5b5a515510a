//! Reducer helpers for the assistant split-view ("snap with AI") mode.

use crate::{
    model::{DesktopState, PreviousLayout, SnapState},
    pages::ContentPage,
    persistence::SnapSession,
    reducer::{open_window, DesktopAction, RuntimeEffect},
};

pub(super) fn reduce_snap_action(
    state: &mut DesktopState,
    action: &DesktopAction,
    effects: &mut Vec<RuntimeEffect>,
) -> bool {
    match action {
        DesktopAction::SnapWithAi { page } => {
            snap_with_ai(state, *page);
            if let Some(window_id) = state.snap.snapped_window_id() {
                effects.push(RuntimeEffect::PersistSnapSession(SnapSession::snapped(
                    window_id.clone(),
                )));
            }
        }
        DesktopAction::ExitSnappedMode => {
            if exit_snapped_mode(state) {
                effects.push(RuntimeEffect::ClearSnapSession);
            }
        }
        DesktopAction::HydrateSnapSession { session } => {
            let page = session
                .is_snapped
                .then(|| ContentPage::from_window_id(&session.window_id))
                .flatten();
            match page {
                Some(page) => {
                    open_window(state, page.window_config());
                    // a reload has no pre-snap layout to go back to
                    state.snap = SnapState::Snapped {
                        window_id: page.window_id(),
                        previous: None,
                    };
                }
                None => effects.push(RuntimeEffect::ClearSnapSession),
            }
        }
        _ => return false,
    }
    true
}

fn snap_with_ai(state: &mut DesktopState, page: ContentPage) {
    let previous = match std::mem::take(&mut state.snap) {
        SnapState::Free => Some(PreviousLayout {
            active_window_id: state.active_window_id.clone(),
            minimized_windows: state.minimized.clone(),
        }),
        SnapState::Snapped { previous, .. } => previous,
    };
    open_window(state, page.window_config());
    state.snap = SnapState::Snapped {
        window_id: page.window_id(),
        previous,
    };
}

fn exit_snapped_mode(state: &mut DesktopState) -> bool {
    let SnapState::Snapped { previous, .. } = std::mem::take(&mut state.snap) else {
        return false;
    };
    if let Some(previous) = previous {
        state.minimized = previous
            .minimized_windows
            .into_iter()
            .filter(|id| state.registry.exists(id))
            .collect();
        state.active_window_id = previous
            .active_window_id
            .filter(|id| state.registry.exists(id) && !state.minimized.contains(id));
    }
    true
}
