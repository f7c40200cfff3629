//! Theme preference provided at the application root.
//!
//! # Responsibility
//! - Hold the light/dark/system preference and resolve it to a concrete
//!   mode against a caller-provided system probe.
//! - Persist changes through the preference repository.
//!
//! # Invariants
//! - The controller is injected, never a process-global singleton.
//! - Unknown or missing stored values fall back to `System`.

use crate::repo::pref_repo::{PrefRepository, PrefResult, PREF_THEME};
use log::info;

/// Concrete rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Stored user preference; `System` defers to the host environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Stable string id used for storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

/// Root-injected theme state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeController {
    preference: ThemePreference,
}

impl ThemeController {
    /// Initializes from the stored preference, falling back to `System` for
    /// missing or unrecognized values.
    pub fn from_store<P: PrefRepository>(prefs: &P) -> PrefResult<Self> {
        let preference = prefs
            .get(PREF_THEME)?
            .as_deref()
            .and_then(ThemePreference::parse)
            .unwrap_or_default();
        Ok(Self { preference })
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Updates the preference and persists it under the original shell's
    /// storage key.
    pub fn set_preference<P: PrefRepository>(
        &mut self,
        prefs: &P,
        preference: ThemePreference,
    ) -> PrefResult<()> {
        prefs.set(PREF_THEME, preference.as_str())?;
        self.preference = preference;
        info!(
            "event=theme_set module=theme status=ok preference={}",
            preference.as_str()
        );
        Ok(())
    }

    /// Resolves the preference to a concrete mode. `system_mode` is whatever
    /// the host environment currently reports.
    pub fn resolve(&self, system_mode: ThemeMode) -> ThemeMode {
        match self.preference {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
            ThemePreference::System => system_mode,
        }
    }
}
