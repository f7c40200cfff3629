//! In-memory directory seeded from the embedded mock dataset.
//!
//! # Responsibility
//! - Stand in for a real backend during local development.
//! - Enforce listing invariants (unique ids, valid records) at load time
//!   instead of masking bad data later.

use crate::directory::{DirectoryError, DirectoryResult, JobDirectory};
use crate::model::job::Job;
use crate::model::user::User;
use log::info;
use serde::Deserialize;
use std::collections::HashSet;

const MOCK_DATASET_JSON: &str = include_str!("mock_jobs.json");

#[derive(Debug, Deserialize)]
struct MockDataset {
    jobs: Vec<Job>,
    user: User,
}

/// Static in-memory directory implementation.
pub struct MockDirectory {
    jobs: Vec<Job>,
    user: User,
}

impl MockDirectory {
    /// Builds a directory from caller-provided records.
    ///
    /// # Errors
    /// - `DuplicateJobId` when two postings share an id.
    /// - `Validation` when any posting fails record validation.
    pub fn new(jobs: Vec<Job>, user: User) -> DirectoryResult<Self> {
        let mut seen = HashSet::new();
        for job in &jobs {
            job.validate()?;
            if !seen.insert(job.id.clone()) {
                return Err(DirectoryError::DuplicateJobId(job.id.clone()));
            }
        }
        Ok(Self { jobs, user })
    }

    /// Builds the directory from the dataset embedded in the binary.
    pub fn seeded() -> DirectoryResult<Self> {
        let dataset: MockDataset = serde_json::from_str(MOCK_DATASET_JSON)?;
        let directory = Self::new(dataset.jobs, dataset.user)?;
        info!(
            "event=directory_seed module=directory status=ok jobs={}",
            directory.jobs.len()
        );
        Ok(directory)
    }
}

impl JobDirectory for MockDirectory {
    fn list_jobs(&self) -> DirectoryResult<Vec<Job>> {
        Ok(self.jobs.clone())
    }

    fn get_job(&self, id: &str) -> DirectoryResult<Option<Job>> {
        Ok(self.jobs.iter().find(|job| job.id == id).cloned())
    }

    fn get_user(&self) -> DirectoryResult<User> {
        Ok(self.user.clone())
    }
}
