//! Session-local feed state.
//!
//! # Responsibility
//! - Hold the current query, selected category and saved-id set.
//! - Re-run the filter pipeline on demand; no memoization is kept.
//!
//! # Invariants
//! - The saved set never contains duplicates: it is seeded deduplicated and
//!   only mutated by membership toggle.
//! - Saved-set edits are session-scoped; nothing writes back to the profile.

use crate::feed::filter::{filter_jobs, FeedCategory};
use crate::model::job::{Job, JobId};
use crate::model::user::User;
use log::debug;

/// Mutable state behind the home feed view.
#[derive(Debug, Clone, Default)]
pub struct HomeFeed {
    query: String,
    category: FeedCategory,
    saved: Vec<JobId>,
}

impl HomeFeed {
    /// Creates feed state seeded from the user's saved jobs.
    ///
    /// Seeding deduplicates while preserving first-occurrence order, so the
    /// toggle invariant holds from the start.
    pub fn new(user: &User) -> Self {
        let mut saved: Vec<JobId> = Vec::with_capacity(user.saved_jobs.len());
        for id in &user.saved_jobs {
            if !saved.contains(id) {
                saved.push(id.clone());
            }
        }
        Self {
            query: String::new(),
            category: FeedCategory::All,
            saved,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn category(&self) -> FeedCategory {
        self.category
    }

    pub fn set_category(&mut self, category: FeedCategory) {
        self.category = category;
    }

    /// Flips saved-set membership for one posting id.
    ///
    /// Adds the id when absent, removes it when present; toggling twice
    /// returns the set to its original state.
    pub fn toggle_save(&mut self, id: &str) {
        if let Some(position) = self.saved.iter().position(|saved| saved == id) {
            self.saved.remove(position);
            debug!("event=save_toggle module=feed action=remove job_id={id}");
        } else {
            self.saved.push(id.to_string());
            debug!("event=save_toggle module=feed action=add job_id={id}");
        }
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.iter().any(|saved| saved == id)
    }

    /// Count shown on the `Saved (n)` chip.
    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }

    pub fn saved_ids(&self) -> &[JobId] {
        &self.saved
    }

    /// Runs the filter pipeline over the listing set with current state.
    pub fn visible_jobs<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        filter_jobs(jobs, &self.query, self.category, &self.saved)
    }

    /// Headline above the results list. Zero matches is the empty state,
    /// not an error.
    pub fn results_headline(count: usize) -> String {
        format!("{count} Jobs Found")
    }

    /// Welcome subtitle with the total listing count.
    pub fn opportunities_line(total: usize) -> String {
        format!("Find your perfect job from {total} available opportunities")
    }
}
