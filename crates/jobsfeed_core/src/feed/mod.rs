//! Home feed: search, category filtering and the saved set.
//!
//! # Responsibility
//! - Own the text-query plus category filter pipeline over the listing set.
//! - Track session-local feed state (query, category, saved job ids).
//! - Shape feed presentation strings the way the home view renders them.
//!
//! # Invariants
//! - Filtering is stable: original listing order is always preserved.
//! - Query and category filters are AND-composed.
//! - The saved set carries set semantics enforced by toggle.

pub mod filter;
pub mod present;
pub mod state;
