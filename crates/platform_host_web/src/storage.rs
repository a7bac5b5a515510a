//! Browser storage adapters.

pub mod session_storage;
