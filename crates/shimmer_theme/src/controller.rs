//! Persisted theme toggle
//!
//! The controller owns the persisted flag and the transition sequencing;
//! the current mode itself lives on the surface (its page-wide mode
//! attribute), so `is_enabled` is a pure read and external mutations of
//! the attribute stay visible to the controller.
//!
//! Persistence failures propagate: unlike the animation engines, the
//! theme flag has no meaningful degraded mode, so callers decide what a
//! broken store means for them.

use crate::mode::{ControlAppearance, ThemeMode};
use shimmer_animation::{TaskId, TaskScheduler};
use shimmer_core::{KvStore, StoreError, Transition};
use std::time::Duration;
use thiserror::Error;

/// Store key for the persisted dark-mode flag
pub const DARK_MODE_KEY: &str = "darkModeEnabled";

/// Duration of the cross-fade between modes
pub const THEME_TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Cross-fade transition hint applied while switching modes
pub const THEME_TRANSITION: Transition = Transition::ease_in_out(THEME_TRANSITION_DURATION);

/// Errors that can occur in the theme controller
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Reading or writing the persisted flag failed
    #[error("theme persistence failed: {0}")]
    Store(#[from] StoreError),
}

/// Where the toggle control lands in the host structure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlPlacement {
    /// Inside the navigation container, before its last existing child,
    /// so a trailing action keeps its position
    BeforeTrailingNavChild,
    /// Fixed-positioned on the page body
    FixedOverlay,
}

/// Placement policy for the toggle control
pub fn placement(has_nav_container: bool) -> ControlPlacement {
    if has_nav_container {
        ControlPlacement::BeforeTrailingNavChild
    } else {
        ControlPlacement::FixedOverlay
    }
}

/// Rendering-surface seam for the theme system
pub trait ThemeSurface {
    /// Current page-wide mode attribute
    fn mode(&self) -> ThemeMode;

    /// Set the page-wide mode attribute
    fn apply_mode(&mut self, mode: ThemeMode);

    /// Whether a navigation container exists to hold the control
    fn has_nav_container(&self) -> bool;

    /// Insert the toggle control at the given placement
    fn insert_control(&mut self, placement: ControlPlacement);

    /// Update the control's icon and accessible label
    fn set_control_appearance(&mut self, appearance: ControlAppearance);

    /// Start smoothing background/text color changes
    fn begin_mode_transition(&mut self, transition: Transition);

    /// Remove the transition hint so it cannot leak into unrelated
    /// style changes
    fn clear_mode_transition(&mut self);
}

enum ThemeCommand {
    ClearTransition,
}

/// Page-wide theme state with a persisted flag and a toggle control
pub struct ThemeController<K: KvStore> {
    store: K,
    transitions: TaskScheduler<ThemeCommand>,
    pending_clear: Option<TaskId>,
}

impl<K: KvStore> ThemeController<K> {
    /// Read the persisted flag and apply the resolved mode immediately
    ///
    /// Runs before anything renders so the page never flashes the wrong
    /// mode. The toggle control is built later, once the host structure
    /// is ready; see [`install_control`](Self::install_control).
    pub fn initialize<S: ThemeSurface>(store: K, surface: &mut S) -> Result<Self, ThemeError> {
        let enabled = store.get(DARK_MODE_KEY)?.as_deref() == Some("true");
        let mode = ThemeMode::from_flag(enabled);
        surface.apply_mode(mode);
        tracing::debug!(?mode, "theme initialized");
        Ok(Self {
            store,
            transitions: TaskScheduler::new(),
            pending_clear: None,
        })
    }

    /// Build and place the toggle control
    ///
    /// Prefers the navigation container; degrades to a fixed overlay on
    /// the page body when none exists.
    pub fn install_control<S: ThemeSurface>(&self, surface: &mut S) {
        let place = placement(surface.has_nav_container());
        surface.insert_control(place);
        let appearance = surface.mode().control_appearance();
        surface.set_control_appearance(appearance);
    }

    /// Invert the mode, persist it, and cross-fade the switch
    ///
    /// A clear of the transition hint is scheduled after the fade; a
    /// pending clear from a rapid earlier toggle is cancelled first so
    /// the hint survives for the full new fade.
    pub fn toggle<S: ThemeSurface>(&mut self, surface: &mut S) -> Result<ThemeMode, ThemeError> {
        let next = surface.mode().inverted();
        surface.apply_mode(next);
        self.store.set(DARK_MODE_KEY, next.flag_str())?;
        surface.set_control_appearance(next.control_appearance());

        surface.begin_mode_transition(THEME_TRANSITION);
        if let Some(pending) = self.pending_clear.take() {
            self.transitions.cancel(pending);
        }
        self.pending_clear = Some(
            self.transitions
                .schedule_in(THEME_TRANSITION_DURATION, ThemeCommand::ClearTransition),
        );

        tracing::debug!(mode = ?next, "theme toggled");
        Ok(next)
    }

    /// Switch to dark mode; a no-op when already dark
    pub fn enable<S: ThemeSurface>(&mut self, surface: &mut S) -> Result<(), ThemeError> {
        if !surface.mode().is_dark() {
            self.toggle(surface)?;
        }
        Ok(())
    }

    /// Switch to light mode; a no-op when already light
    pub fn disable<S: ThemeSurface>(&mut self, surface: &mut S) -> Result<(), ThemeError> {
        if surface.mode().is_dark() {
            self.toggle(surface)?;
        }
        Ok(())
    }

    /// Whether dark mode is currently applied; no side effects
    pub fn is_enabled<S: ThemeSurface>(&self, surface: &S) -> bool {
        surface.mode().is_dark()
    }

    /// Advance time; clears the transition hint once the fade completes
    pub fn advance<S: ThemeSurface>(&mut self, dt: Duration, surface: &mut S) {
        for ThemeCommand::ClearTransition in self.transitions.advance(dt) {
            surface.clear_mode_transition();
            self.pending_clear = None;
        }
    }

    /// Access the backing store (primarily for tests and hosts that
    /// share it)
    pub fn store(&self) -> &K {
        &self.store
    }

    /// Give the store back, e.g. to carry it across a simulated reload
    pub fn into_store(self) -> K {
        self.store
    }
}
