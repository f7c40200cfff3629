//! Settings-page profile editing.
//!
//! # Responsibility
//! - Provide local, synchronous edits over a copy of the user record.
//!
//! # Invariants
//! - Edits never reach the directory; discarding the editor discards them.
//! - The skill list never contains exact duplicates.

pub mod editor;
