//! Theme toggle walkthrough against a console surface
//!
//! Run with `cargo run --example toggle_demo`. Demonstrates the external
//! API, the deferred control installation, and the transition clearing.

use shimmer_core::{MemoryStore, Transition};
use shimmer_theme::{
    ControlAppearance, ControlPlacement, PaletteTokens, ThemeController, ThemeMode, ThemeSurface,
    THEME_TRANSITION_DURATION,
};

#[derive(Default)]
struct ConsoleSurface {
    mode: ThemeMode,
    fading: bool,
}

impl ThemeSurface for ConsoleSurface {
    fn mode(&self) -> ThemeMode {
        self.mode
    }

    fn apply_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        println!("  mode attribute -> {mode:?}");
    }

    fn has_nav_container(&self) -> bool {
        true
    }

    fn insert_control(&mut self, placement: ControlPlacement) {
        println!("  control inserted at {placement:?}");
    }

    fn set_control_appearance(&mut self, appearance: ControlAppearance) {
        println!("  control shows {} ({})", appearance.icon, appearance.label);
    }

    fn begin_mode_transition(&mut self, transition: Transition) {
        self.fading = true;
        println!("  cross-fading over {:?}", transition.duration);
    }

    fn clear_mode_transition(&mut self) {
        self.fading = false;
        println!("  transition hint cleared");
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut surface = ConsoleSurface::default();

    println!("initializing:");
    let mut theme = ThemeController::initialize(MemoryStore::new(), &mut surface)
        .expect("memory store never fails");
    theme.install_control(&mut surface);

    println!("toggling dark:");
    theme.toggle(&mut surface).expect("memory store never fails");
    theme.advance(THEME_TRANSITION_DURATION, &mut surface);

    let palette = PaletteTokens::for_mode(surface.mode());
    println!(
        "dark background: rgb({:.0}, {:.0}, {:.0})",
        palette.background.r * 255.0,
        palette.background.g * 255.0,
        palette.background.b * 255.0
    );

    println!("enable while enabled (no-op):");
    theme.enable(&mut surface).expect("memory store never fails");

    println!("back to light:");
    theme.disable(&mut surface).expect("memory store never fails");
    theme.advance(THEME_TRANSITION_DURATION, &mut surface);
    println!("dark enabled: {}", theme.is_enabled(&surface));
}
