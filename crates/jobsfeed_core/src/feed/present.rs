//! Presentation helpers for feed cards.
//!
//! # Responsibility
//! - Format salary, posting age and skill badges the way the home view
//!   renders them.
//!
//! # Invariants
//! - Helpers are pure; "now" is always passed in for determinism.

use crate::model::job::Job;
use chrono::{DateTime, Utc};

/// Maximum number of skill badges shown on a card before collapsing.
pub const VISIBLE_SKILL_LIMIT: usize = 5;

/// Formats an advertised salary range, or the placeholder when none is set.
///
/// Ranges render in thousands: `$120k - $160k`.
pub fn format_salary(job: &Job) -> String {
    match &job.salary {
        Some(salary) => format!("${}k - ${}k", salary.min / 1000, salary.max / 1000),
        None => "Competitive".to_string(),
    }
}

/// Formats posting age relative to `now`.
///
/// Under 24 hours renders as whole hours (`5h ago`), otherwise whole days
/// (`3d ago`). Unparseable or future timestamps fall back to `recently`.
pub fn format_time_ago(posted_at: &str, now: DateTime<Utc>) -> String {
    let Ok(posted) = DateTime::parse_from_rfc3339(posted_at) else {
        return "recently".to_string();
    };
    let elapsed = now.signed_duration_since(posted.with_timezone(&Utc));
    let hours = elapsed.num_hours();
    if hours < 0 {
        return "recently".to_string();
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}

/// Splits a skill list into the visible prefix and the collapsed remainder
/// count (the `+N more` badge; zero means no badge).
pub fn visible_skills(skills: &[String]) -> (&[String], usize) {
    if skills.len() <= VISIBLE_SKILL_LIMIT {
        (skills, 0)
    } else {
        (
            &skills[..VISIBLE_SKILL_LIMIT],
            skills.len() - VISIBLE_SKILL_LIMIT,
        )
    }
}
