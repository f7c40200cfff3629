//! Profile editor backing the settings page.
//!
//! # Responsibility
//! - Field-level mutation of an editable user copy.
//! - Skill add/remove with the input-box semantics of the settings view.
//!
//! # Invariants
//! - `add_skill` trims input and rejects empty or exact-duplicate entries
//!   (case-sensitive comparison); accepted skills append to the end.
//! - The pending input is cleared only when a skill was actually added.
//! - No email-format validation, no persistence, no undo.

use crate::model::user::User;

/// Experience options offered by the settings select. Free-form values are
/// still accepted by [`ProfileEditor::set_experience`].
pub const EXPERIENCE_OPTIONS: &[&str] =
    &["Entry level", "1-2 years", "3-5 years", "5+ years", "10+ years"];

/// Local notification switches shown on the settings page. Toggled in
/// session state only; nothing is delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub job_alerts: bool,
    pub messages: bool,
    pub updates: bool,
    pub newsletter: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            job_alerts: true,
            messages: true,
            updates: false,
            newsletter: true,
        }
    }
}

/// Editable session copy of the user profile.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    user: User,
    notifications: NotificationPrefs,
    skill_input: String,
}

impl ProfileEditor {
    /// Starts editing a copy of the given profile record.
    pub fn new(user: User) -> Self {
        Self {
            user,
            notifications: NotificationPrefs::default(),
            skill_input: String::new(),
        }
    }

    /// Current state of the edited copy.
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn notifications(&self) -> &NotificationPrefs {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationPrefs {
        &mut self.notifications
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.user.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.user.email = email.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.user.title = Some(title.into());
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.user.location = Some(location.into());
    }

    pub fn set_experience(&mut self, experience: impl Into<String>) {
        self.user.experience = experience.into();
    }

    /// Pending text in the add-skill input box.
    pub fn skill_input(&self) -> &str {
        &self.skill_input
    }

    pub fn set_skill_input(&mut self, input: impl Into<String>) {
        self.skill_input = input.into();
    }

    /// Commits the pending skill input.
    ///
    /// Returns `true` when the skill was appended (and the input cleared);
    /// `false` when the input was blank or a duplicate, leaving both the
    /// skill list and the input untouched.
    pub fn add_skill(&mut self) -> bool {
        let candidate = self.skill_input.trim();
        if candidate.is_empty() || self.user.skills.iter().any(|skill| skill == candidate) {
            return false;
        }
        self.user.skills.push(candidate.to_string());
        self.skill_input.clear();
        true
    }

    /// Removes the exact-matching skill, if present.
    ///
    /// The add invariant guarantees at most one match.
    pub fn remove_skill(&mut self, skill: &str) {
        self.user.skills.retain(|existing| existing != skill);
    }
}
