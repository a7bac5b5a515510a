//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! Concrete browser adapters live in `platform_host_web`; this crate only carries the traits,
//! in-memory implementations used by tests and native builds, and the typed JSON save helper.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod session;

pub use session::{save_session_with, MemorySessionStore, SessionStore};
