//! Shared domain model for the job-browsing core.
//!
//! # Responsibility
//! - Define the canonical `Job` and `User` record shapes consumed by the
//!   feed and settings surfaces.
//! - Keep serialization aligned with the external camelCase schema.
//!
//! # Invariants
//! - Job ids are unique within any loaded listing set.
//! - `Job` records are immutable for the lifetime of a session.

pub mod filter;
pub mod job;
pub mod user;
