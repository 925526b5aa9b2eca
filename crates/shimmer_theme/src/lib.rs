//! Shimmer Theme System
//!
//! Page-wide light/dark display mode with a persisted flag, a toggle
//! control, and palette token bundles:
//!
//! - **ThemeMode**: the two-state mode machine and control appearance
//! - **ThemeController**: reads the persisted flag at startup, applies
//!   the mode before anything renders, and exposes the external API
//!   (`toggle` / `enable` / `disable` / `is_enabled`)
//! - **PaletteTokens**: concrete light/dark color bundles for hosts that
//!   resolve colors through the theme
//!
//! Like the animation engines, the controller never touches a real
//! rendering surface: hosts implement [`ThemeSurface`] and the
//! controller drives it.

pub mod controller;
pub mod mode;
pub mod palette;

pub use controller::{
    placement, ControlPlacement, ThemeController, ThemeError, ThemeSurface, DARK_MODE_KEY,
    THEME_TRANSITION, THEME_TRANSITION_DURATION,
};
pub use mode::{ControlAppearance, ThemeMode};
pub use palette::{Color, PaletteTokens};
