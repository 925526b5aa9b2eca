//! Palette token bundles
//!
//! Concrete color sets for both modes, for hosts that resolve colors
//! through the theme instead of hard-coding them per element. Token
//! names follow the surface roles the toggle actually restyles:
//! backgrounds, text, borders, shadows, cards, inputs.

use crate::mode::ThemeMode;

/// An RGBA color with components in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// The same color with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Color tokens for one display mode
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteTokens {
    /// Page background
    pub background: Color,
    /// Raised surface background
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub shadow: Color,
    pub shadow_hover: Color,
    pub card_bg: Color,
    pub input_bg: Color,
    /// Brand accent used by links, focus rings, and selected options
    pub accent: Color,
}

impl PaletteTokens {
    /// Light-mode tokens
    pub fn light() -> Self {
        Self {
            background: Color::from_hex(0xF5F7FA),
            surface: Color::WHITE,
            text_primary: Color::from_hex(0x333333),
            text_secondary: Color::from_hex(0x666666),
            border: Color::from_hex(0xE0E0E0),
            shadow: Color::BLACK.with_alpha(0.05),
            shadow_hover: Color::BLACK.with_alpha(0.1),
            card_bg: Color::WHITE,
            input_bg: Color::from_hex(0xF8F9FA),
            accent: Color::from_hex(0x667EEA),
        }
    }

    /// Dark-mode tokens
    pub fn dark() -> Self {
        Self {
            background: Color::from_hex(0x1A1A2E),
            surface: Color::from_hex(0x16213E),
            text_primary: Color::from_hex(0xE4E4E4),
            text_secondary: Color::from_hex(0xB0B0B0),
            border: Color::from_hex(0x2D3548),
            shadow: Color::BLACK.with_alpha(0.3),
            shadow_hover: Color::BLACK.with_alpha(0.5),
            card_bg: Color::from_hex(0x16213E),
            input_bg: Color::from_hex(0x0F1419),
            accent: Color::from_hex(0x8B9CFF),
        }
    }

    /// Tokens for the given mode
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_extracts_channels() {
        let c = Color::from_hex(0x16213E);
        assert!((c.r - 0x16 as f32 / 255.0).abs() < 1e-6);
        assert!((c.g - 0x21 as f32 / 255.0).abs() < 1e-6);
        assert!((c.b - 0x3E as f32 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_with_alpha_keeps_channels() {
        let c = Color::from_hex(0x667EEA).with_alpha(0.2);
        assert_eq!(c.a, 0.2);
        assert_eq!(c.r, Color::from_hex(0x667EEA).r);
    }

    #[test]
    fn test_for_mode_selects_bundle() {
        assert_eq!(PaletteTokens::for_mode(ThemeMode::Light), PaletteTokens::light());
        assert_eq!(PaletteTokens::for_mode(ThemeMode::Dark), PaletteTokens::dark());
        assert_ne!(PaletteTokens::light(), PaletteTokens::dark());
    }
}
