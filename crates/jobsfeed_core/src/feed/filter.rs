//! Pure filter pipeline over the static listing set.
//!
//! # Responsibility
//! - Apply the free-text query and the categorical chip filter.
//!
//! # Invariants
//! - Result is the ordered subsequence of the input satisfying both filters;
//!   no re-sorting, no de-duplication.
//! - Recomputation is trivial by design: the data set is small and static,
//!   so no incremental indexing is kept.

use crate::model::job::{Job, JobId, JobType};

/// Categorical chip filter applied on top of the text query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedCategory {
    /// No categorical restriction.
    #[default]
    All,
    /// Remote-friendly postings only (`is_remote`).
    Remote,
    /// `Full-time` postings only.
    FullTime,
    /// Postings whose id is in the saved set.
    Saved,
}

impl FeedCategory {
    /// Stable string id used by shell bindings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Remote => "remote",
            Self::FullTime => "fulltime",
            Self::Saved => "saved",
        }
    }

    /// Parses one category from its stable string id.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "remote" => Some(Self::Remote),
            "fulltime" => Some(Self::FullTime),
            "saved" => Some(Self::Saved),
            _ => None,
        }
    }
}

/// Filters the listing set by query and category.
///
/// # Contract
/// - Non-empty `query`: case-insensitive substring match against title OR
///   company OR any skill.
/// - `category != All`: further restricts by remote flag, full-time type, or
///   saved-set membership. `All` is a no-op.
/// - Both filters AND-compose; input order is preserved.
pub fn filter_jobs<'a>(
    jobs: &'a [Job],
    query: &str,
    category: FeedCategory,
    saved: &[JobId],
) -> Vec<&'a Job> {
    jobs.iter()
        .filter(|job| matches_query(job, query))
        .filter(|job| matches_category(job, category, saved))
        .collect()
}

fn matches_query(job: &Job, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    job.title.to_lowercase().contains(&needle)
        || job.company.to_lowercase().contains(&needle)
        || job
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&needle))
}

fn matches_category(job: &Job, category: FeedCategory, saved: &[JobId]) -> bool {
    match category {
        FeedCategory::All => true,
        FeedCategory::Remote => job.is_remote,
        FeedCategory::FullTime => job.kind == JobType::FullTime,
        FeedCategory::Saved => saved.iter().any(|id| *id == job.id),
    }
}
