//! Executor for reducer-emitted runtime effects and boot-time hydration.

use leptos::logging;
use platform_host::SessionStore;

use crate::{
    persistence::{self, PersistenceError},
    reducer::{DesktopAction, RuntimeEffect},
};

/// Runs effects in order. Persistence is best-effort: failures are logged and skipped.
pub fn run_runtime_effects<S: SessionStore + ?Sized>(store: &S, effects: Vec<RuntimeEffect>) {
    for effect in effects {
        run_runtime_effect(store, effect);
    }
}

fn run_runtime_effect<S: SessionStore + ?Sized>(store: &S, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::PersistSnapSession(session) => {
            if let Err(err) = persistence::save_snap_session(store, &session) {
                logging::warn!("persist snap session failed: {err}");
            }
        }
        RuntimeEffect::ClearSnapSession => {
            if let Err(err) = persistence::clear_snap_session(store) {
                logging::warn!("clear snap session failed: {err}");
            }
        }
    }
}

/// Builds the hydration action for a snap session persisted before a reload.
///
/// A malformed entry is removed so it is not retried on every boot.
pub fn boot_hydration_action<S: SessionStore + ?Sized>(store: &S) -> Option<DesktopAction> {
    match persistence::load_snap_session(store) {
        Ok(Some(session)) => Some(DesktopAction::HydrateSnapSession { session }),
        Ok(None) => None,
        Err(err @ PersistenceError::Decode(_)) => {
            logging::warn!("dropping persisted snap session: {err}");
            run_runtime_effect(store, RuntimeEffect::ClearSnapSession);
            None
        }
        Err(err) => {
            logging::warn!("snap session load failed: {err}");
            None
        }
    }
}
