//! Data-access contracts for listings and the local profile.
//!
//! # Responsibility
//! - Define the capability surface (`list jobs`, `get job`, `get user`) a
//!   backing store must provide.
//! - Keep view/session logic decoupled from where the data comes from, so a
//!   real backend can be substituted later without touching it.
//!
//! # Invariants
//! - Implementations must reject listing sets with duplicate job ids.
//! - Listing order is meaningful and must be preserved by `list_jobs`.

use crate::model::job::{Job, JobId, JobValidationError};
use crate::model::user::User;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod mock;

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Data-access error for listing and profile reads.
#[derive(Debug)]
pub enum DirectoryError {
    /// Source payload cannot be decoded into the shared schema.
    InvalidData(String),
    /// Two postings in one listing set share an id.
    DuplicateJobId(JobId),
    /// A posting failed record-level validation.
    Validation(JobValidationError),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidData(message) => write!(f, "invalid listing data: {message}"),
            Self::DuplicateJobId(id) => write!(f, "duplicate job id: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DirectoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<JobValidationError> for DirectoryError {
    fn from(value: JobValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidData(value.to_string())
    }
}

/// Capability interface over the job/profile backing store.
pub trait JobDirectory {
    /// Returns the full listing set in its canonical order.
    fn list_jobs(&self) -> DirectoryResult<Vec<Job>>;
    /// Looks up one posting by stable id.
    fn get_job(&self, id: &str) -> DirectoryResult<Option<Job>>;
    /// Returns the local user's profile record.
    fn get_user(&self) -> DirectoryResult<User>;
}
