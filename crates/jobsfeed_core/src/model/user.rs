//! User profile domain model.
//!
//! # Responsibility
//! - Define the profile record shared by the feed header and settings page.
//!
//! # Invariants
//! - `saved_jobs` carries set semantics: membership is flipped by the feed's
//!   toggle, never duplicated by it.

use crate::model::job::JobId;
use serde::{Deserialize, Serialize};

/// Profile record for the (single) local user.
///
/// Mutated only through session-local editors; there is no write-back to the
/// directory, so edits are discarded when the session ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub skills: Vec<String>,
    /// Free-form experience label, e.g. `3-5 years`.
    pub experience: String,
    pub saved_jobs: Vec<JobId>,
    pub applied_jobs: Vec<JobId>,
}

impl User {
    /// Derives avatar-fallback initials from the display name.
    ///
    /// Takes the first character of each whitespace-separated name part,
    /// uppercased. Empty names yield an empty string.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::User;

    fn user_named(name: &str) -> User {
        User {
            id: "u1".to_string(),
            name: name.to_string(),
            email: "a@b.c".to_string(),
            avatar: None,
            title: None,
            location: None,
            skills: Vec::new(),
            experience: "3-5 years".to_string(),
            saved_jobs: Vec::new(),
            applied_jobs: Vec::new(),
        }
    }

    #[test]
    fn initials_join_first_letters_uppercased() {
        assert_eq!(user_named("ada lovelace").initials(), "AL");
        assert_eq!(user_named("Grace").initials(), "G");
    }

    #[test]
    fn initials_of_empty_name_are_empty() {
        assert_eq!(user_named("   ").initials(), "");
    }
}
