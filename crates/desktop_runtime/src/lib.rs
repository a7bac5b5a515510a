//! Window/session manager for the portfolio desktop.
//!
//! [`reducer::reduce_desktop`] is the single transition function. [`DesktopManager`] and
//! [`DesktopRuntimeContext`] wrap it for plain and reactive callers and execute the session
//! persistence effects it emits.

pub mod effect_executor;
pub mod manager;
pub mod model;
pub mod pages;
pub mod persistence;
pub mod reducer;
pub mod registry;
pub mod runtime_context;
pub mod stacking;

pub use manager::DesktopManager;
pub use model::*;
pub use pages::{page_table, ContentPage, PageDescriptor, PageId, UnknownPage};
pub use persistence::{
    clear_snap_session, load_snap_session, save_snap_session, PersistenceError, SnapSession,
};
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use runtime_context::DesktopRuntimeContext;
pub use stacking::BASE_Z_INDEX;
