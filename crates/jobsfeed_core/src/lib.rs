//! Core domain logic for JobsFeed, a local-first job-listing browser.
//! This crate is the single source of truth for feed, profile and splash
//! behavior; UI shells bind to it without owning any business rules.

pub mod db;
pub mod directory;
pub mod feed;
pub mod logging;
pub mod model;
pub mod profile;
pub mod repo;
pub mod router;
pub mod session;
pub mod splash;
pub mod theme;

pub use directory::mock::MockDirectory;
pub use directory::{DirectoryError, DirectoryResult, JobDirectory};
pub use feed::filter::{filter_jobs, FeedCategory};
pub use feed::state::HomeFeed;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::filter::JobFilter;
pub use model::job::{ExperienceLevel, Job, JobId, JobType, SalaryRange};
pub use model::user::User;
pub use profile::editor::{NotificationPrefs, ProfileEditor, EXPERIENCE_OPTIONS};
pub use repo::pref_repo::{
    PrefError, PrefRepository, PrefResult, SqlitePrefRepository, PREF_HAS_SEEN_SPLASH, PREF_THEME,
};
pub use router::Route;
pub use session::{AppSession, SessionError};
pub use splash::sequence::{EntryAction, SplashPhase, SplashSequence, SPLASH_GATE};
pub use theme::{ThemeController, ThemeMode, ThemePreference};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
