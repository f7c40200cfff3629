//! Forward-looking structured filter over postings.
//!
//! # Responsibility
//! - Declare the query shape a richer filter panel would submit.
//!
//! The home feed intentionally does not consume this shape yet; it applies
//! its own text-query plus category pipeline. The predicate here exists so a
//! future backend can be handed a complete filter without touching view
//! logic.

use crate::model::job::{ExperienceLevel, Job, JobType};
use serde::{Deserialize, Serialize};

/// Structured posting filter. All fields are optional; unset fields do not
/// constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<JobType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_remote: Option<bool>,
}

impl JobFilter {
    /// Returns whether a posting satisfies every set constraint.
    ///
    /// # Contract
    /// - `location` matches by case-insensitive substring.
    /// - `salary_min`/`salary_max` require an advertised range whose span
    ///   overlaps the requested bounds.
    /// - `skills` requires every listed skill, case-insensitively.
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(location) = &self.location {
            if !contains_ci(&job.location, location) {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if job.kind != kind {
                return false;
            }
        }
        if let Some(level) = self.experience_level {
            if job.experience_level != level {
                return false;
            }
        }
        if self.salary_min.is_some() || self.salary_max.is_some() {
            let Some(salary) = &job.salary else {
                return false;
            };
            if let Some(min) = self.salary_min {
                if salary.max < min {
                    return false;
                }
            }
            if let Some(max) = self.salary_max {
                if salary.min > max {
                    return false;
                }
            }
        }
        if let Some(skills) = &self.skills {
            let has_all = skills.iter().all(|wanted| {
                job.skills
                    .iter()
                    .any(|skill| skill.eq_ignore_ascii_case(wanted))
            });
            if !has_all {
                return false;
            }
        }
        if let Some(is_remote) = self.is_remote {
            if job.is_remote != is_remote {
                return false;
            }
        }
        true
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
