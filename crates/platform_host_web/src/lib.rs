//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;

pub use storage::session_storage::WebSessionStore;

