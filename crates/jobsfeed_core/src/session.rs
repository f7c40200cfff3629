//! Application session wiring.
//!
//! # Responsibility
//! - Tie directory, preference store, theme, routing and feed state into the
//!   single surface a UI shell binds to.
//!
//! # Invariants
//! - The listing set is loaded once per session and treated as immutable.
//! - Profile editors hand out fresh copies; session restart discards edits.

use crate::directory::{DirectoryError, JobDirectory};
use crate::feed::state::HomeFeed;
use crate::model::job::Job;
use crate::model::user::User;
use crate::profile::editor::ProfileEditor;
use crate::repo::pref_repo::{PrefError, PrefRepository};
use crate::router::Route;
use crate::splash::sequence::{complete_splash, EntryAction};
use crate::theme::{ThemeController, ThemePreference};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Session bootstrap/runtime error.
#[derive(Debug)]
pub enum SessionError {
    Directory(DirectoryError),
    Pref(PrefError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directory(err) => write!(f, "{err}"),
            Self::Pref(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Directory(err) => Some(err),
            Self::Pref(err) => Some(err),
        }
    }
}

impl From<DirectoryError> for SessionError {
    fn from(value: DirectoryError) -> Self {
        Self::Directory(value)
    }
}

impl From<PrefError> for SessionError {
    fn from(value: PrefError) -> Self {
        Self::Pref(value)
    }
}

/// One running app session over an injected directory and preference store.
pub struct AppSession<D: JobDirectory, P: PrefRepository> {
    directory: D,
    prefs: P,
    theme: ThemeController,
    route: Route,
    jobs: Vec<Job>,
    user: User,
    feed: HomeFeed,
}

impl<D: JobDirectory, P: PrefRepository> AppSession<D, P> {
    /// Boots a session: loads the listing set and profile, restores the
    /// theme preference and lands on the splash route.
    pub fn start(directory: D, prefs: P) -> Result<Self, SessionError> {
        let jobs = directory.list_jobs()?;
        let user = directory.get_user()?;
        let feed = HomeFeed::new(&user);
        let theme = ThemeController::from_store(&prefs)?;
        info!(
            "event=session_start module=session status=ok jobs={} user={}",
            jobs.len(),
            user.id
        );
        Ok(Self {
            directory,
            prefs,
            theme,
            route: Route::Splash,
            jobs,
            user,
            feed,
        })
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn navigate(&mut self, route: Route) {
        self.route = route;
    }

    /// Navigates by path string, falling through to `NotFound`.
    pub fn navigate_path(&mut self, path: &str) {
        self.route = Route::parse(path);
    }

    /// Exits the splash screen via any entry action: records the seen flag
    /// and moves to the home feed.
    pub fn complete_splash(&mut self, action: EntryAction) -> Result<Route, SessionError> {
        let route = complete_splash(&self.prefs, action)?;
        self.route = route;
        Ok(route)
    }

    /// Full listing set in canonical order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn feed(&self) -> &HomeFeed {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut HomeFeed {
        &mut self.feed
    }

    /// Current feed results under the active query/category/saved state.
    pub fn visible_jobs(&self) -> Vec<&Job> {
        self.feed.visible_jobs(&self.jobs)
    }

    /// Hands out a fresh editor over a copy of the profile. Edits live and
    /// die with the editor.
    pub fn profile_editor(&self) -> ProfileEditor {
        ProfileEditor::new(self.user.clone())
    }

    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    pub fn set_theme_preference(&mut self, preference: ThemePreference) -> Result<(), SessionError> {
        self.theme.set_preference(&self.prefs, preference)?;
        Ok(())
    }

    /// Escape hatch for shells that need direct directory access (e.g. a
    /// future detail view calling `get_job`).
    pub fn directory(&self) -> &D {
        &self.directory
    }
}
