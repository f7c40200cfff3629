//! Job posting domain model.
//!
//! # Responsibility
//! - Define the canonical posting record shown in the home feed.
//! - Provide validation for invariants the directory relies on.
//!
//! # Invariants
//! - `id` is stable, non-empty and never reused for another posting.
//! - `salary.min` must not exceed `salary.max` when a range is present.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a posting.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Ids come from the external dataset and are opaque strings, not UUIDs.
pub type JobId = String;

/// Employment arrangement advertised by a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Remote,
    Internship,
}

impl JobType {
    /// Display label matching the external schema spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Remote => "Remote",
            Self::Internship => "Internship",
        }
    }
}

/// Seniority band attached to a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Mid => "Mid",
            Self::Senior => "Senior",
            Self::Lead => "Lead",
        }
    }
}

/// Advertised salary range in whole currency units per year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

/// Validation failure for a posting record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobValidationError {
    /// Posting id is empty or whitespace-only.
    EmptyId,
    /// Salary range has `min` greater than `max`.
    InvertedSalaryRange { min: u32, max: u32 },
}

impl Display for JobValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "job id cannot be empty"),
            Self::InvertedSalaryRange { min, max } => {
                write!(f, "salary range min {min} exceeds max {max}")
            }
        }
    }
}

impl Error for JobValidationError {}

/// Canonical posting record shown in the feed.
///
/// Immutable for the lifetime of a session; sourced from the directory's
/// static listing set. Field naming follows the external camelCase schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: JobType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalaryRange>,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    /// RFC 3339 timestamp string, kept verbatim from the dataset.
    pub posted_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub is_remote: bool,
    pub experience_level: ExperienceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl Job {
    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `EmptyId` when the id is blank.
    /// - `InvertedSalaryRange` when a range is present with `min > max`.
    pub fn validate(&self) -> Result<(), JobValidationError> {
        if self.id.trim().is_empty() {
            return Err(JobValidationError::EmptyId);
        }
        if let Some(salary) = &self.salary {
            if salary.min > salary.max {
                return Err(JobValidationError::InvertedSalaryRange {
                    min: salary.min,
                    max: salary.max,
                });
            }
        }
        Ok(())
    }
}
