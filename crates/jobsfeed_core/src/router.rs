//! Client-side route surface.
//!
//! # Responsibility
//! - Map path strings to the three screens plus the catch-all.
//!
//! # Invariants
//! - `/` and `/splash` both resolve to the splash screen.
//! - Any unmatched path resolves to `NotFound`, never an error.

/// Screens reachable through client-side navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Splash,
    Home,
    Settings,
    NotFound,
}

impl Route {
    /// Resolves a path to its screen. Matching is exact; there is no
    /// normalization beyond the two splash aliases.
    pub fn parse(path: &str) -> Self {
        match path {
            "/" | "/splash" => Self::Splash,
            "/home" => Self::Home,
            "/settings" => Self::Settings,
            _ => Self::NotFound,
        }
    }

    /// Canonical path for the screen.
    pub fn as_path(self) -> &'static str {
        match self {
            Self::Splash => "/splash",
            Self::Home => "/home",
            Self::Settings => "/settings",
            Self::NotFound => "/not-found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn known_paths_resolve_to_their_screens() {
        assert_eq!(Route::parse("/"), Route::Splash);
        assert_eq!(Route::parse("/splash"), Route::Splash);
        assert_eq!(Route::parse("/home"), Route::Home);
        assert_eq!(Route::parse("/settings"), Route::Settings);
    }

    #[test]
    fn unmatched_paths_fall_through_to_not_found() {
        assert_eq!(Route::parse("/jobs/1"), Route::NotFound);
        assert_eq!(Route::parse("/HOME"), Route::NotFound);
        assert_eq!(Route::parse(""), Route::NotFound);
    }

    #[test]
    fn canonical_paths_round_trip() {
        for route in [Route::Splash, Route::Home, Route::Settings] {
            assert_eq!(Route::parse(route.as_path()), route);
        }
        assert_eq!(Route::parse(Route::NotFound.as_path()), Route::NotFound);
    }
}
