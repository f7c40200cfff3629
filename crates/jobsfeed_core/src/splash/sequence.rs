//! Splash gate timing, parallax math and exit actions.
//!
//! # Responsibility
//! - Decide Loading vs Ready purely from elapsed time.
//! - Map pointer position to cosmetic per-layer parallax offsets.
//! - Perform the shared exit path for every entry action.
//!
//! # Invariants
//! - The gate duration is fixed; there is no early reveal.
//! - Parallax has zero semantic role; it never feeds back into state.
//! - All entry actions behave identically: write the seen flag, go home.

use crate::repo::pref_repo::{PrefRepository, PrefResult, PREF_HAS_SEEN_SPLASH};
use crate::router::Route;
use log::info;
use std::time::{Duration, Instant};

/// Loading window before the call-to-action is revealed.
pub const SPLASH_GATE: Duration = Duration::from_millis(2500);

/// Display state of the splash screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Spinner and loading copy.
    Loading,
    /// Call-to-action buttons revealed.
    Ready,
}

/// Entry actions available once the gate opens. There is no real
/// authentication; every action takes the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    Continue,
    Login,
    SignUp,
}

impl EntryAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Login => "login",
            Self::SignUp => "signup",
        }
    }
}

/// Pointer position in shell coordinates, fed by the mouse-move listener.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Per-layer parallax multipliers for the floating background elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    pub x_factor: f64,
    pub y_factor: f64,
}

/// Layer multipliers in the order the original background stacks them.
pub const PARALLAX_LAYERS: &[ParallaxLayer] = &[
    ParallaxLayer { x_factor: 0.02, y_factor: 0.02 },
    ParallaxLayer { x_factor: 0.01, y_factor: 0.01 },
    ParallaxLayer { x_factor: 0.015, y_factor: 0.015 },
    ParallaxLayer { x_factor: 0.008, y_factor: 0.012 },
    ParallaxLayer { x_factor: 0.012, y_factor: 0.008 },
];

/// Cosmetic translate offsets for each background layer.
pub fn parallax_offsets(pointer: PointerPosition) -> Vec<(f64, f64)> {
    PARALLAX_LAYERS
        .iter()
        .map(|layer| (pointer.x * layer.x_factor, pointer.y * layer.y_factor))
        .collect()
}

/// Splash timing state. The phase is a pure function of elapsed time; the
/// wall-clock variant exists for shell convenience.
#[derive(Debug, Clone, Copy)]
pub struct SplashSequence {
    started_at: Instant,
}

impl SplashSequence {
    /// Starts the gate now.
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Phase for a given elapsed duration since start.
    pub fn phase_at(elapsed: Duration) -> SplashPhase {
        if elapsed < SPLASH_GATE {
            SplashPhase::Loading
        } else {
            SplashPhase::Ready
        }
    }

    /// Phase right now, against the wall clock.
    pub fn phase(&self) -> SplashPhase {
        Self::phase_at(self.started_at.elapsed())
    }
}

impl Default for SplashSequence {
    fn default() -> Self {
        Self::start()
    }
}

/// Shared exit path for every entry action.
///
/// Writes the `hasSeenSplash` flag (written, never read back by the app)
/// and resolves to the home route.
pub fn complete_splash<P: PrefRepository>(prefs: &P, action: EntryAction) -> PrefResult<Route> {
    prefs.set(PREF_HAS_SEEN_SPLASH, "true")?;
    info!(
        "event=splash_complete module=splash status=ok action={}",
        action.as_str()
    );
    Ok(Route::Home)
}

#[cfg(test)]
mod tests {
    use super::{
        parallax_offsets, PointerPosition, SplashPhase, SplashSequence, PARALLAX_LAYERS,
        SPLASH_GATE,
    };
    use std::time::Duration;

    #[test]
    fn gate_is_loading_strictly_before_2500ms() {
        assert_eq!(
            SplashSequence::phase_at(Duration::ZERO),
            SplashPhase::Loading
        );
        assert_eq!(
            SplashSequence::phase_at(Duration::from_millis(2499)),
            SplashPhase::Loading
        );
        assert_eq!(SplashSequence::phase_at(SPLASH_GATE), SplashPhase::Ready);
        assert_eq!(
            SplashSequence::phase_at(Duration::from_secs(60)),
            SplashPhase::Ready
        );
    }

    #[test]
    fn parallax_scales_pointer_by_layer_factors() {
        let offsets = parallax_offsets(PointerPosition { x: 100.0, y: 200.0 });
        assert_eq!(offsets.len(), PARALLAX_LAYERS.len());
        assert_eq!(offsets[0], (2.0, 4.0));
        assert_eq!(offsets[1], (1.0, 2.0));
    }

    #[test]
    fn parallax_at_origin_is_zero_everywhere() {
        for (x, y) in parallax_offsets(PointerPosition::default()) {
            assert_eq!((x, y), (0.0, 0.0));
        }
    }
}
