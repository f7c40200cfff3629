//! Splash screen sequencing.
//!
//! # Responsibility
//! - Gate the splash call-to-action behind a fixed loading window.
//! - Record the seen flag and resolve the follow-up route on exit.

pub mod sequence;
