//! Repository layer for client-local preferences.
//!
//! # Responsibility
//! - Define the key-value contract that fills the browser-localStorage role.
//! - Isolate SQL details from splash/theme/session orchestration.
//!
//! # Invariants
//! - Keys are validated before any SQL mutation.
//! - `set` carries upsert semantics; re-setting a key is not an error.

pub mod pref_repo;
