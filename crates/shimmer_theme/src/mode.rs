//! Theme mode state
//!
//! Two steady states, transitions only via explicit toggling. The flag
//! string mapping matches what lands in the persisted store.

/// Page-wide display mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Icon and accessible label for the toggle control in a given mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlAppearance {
    pub icon: &'static str,
    pub label: &'static str,
}

impl ThemeMode {
    /// Resolve a persisted flag into a mode; absent or unparsable = light
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// The other mode
    pub fn inverted(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Flag string persisted for this mode
    pub fn flag_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "false",
            ThemeMode::Dark => "true",
        }
    }

    /// What the toggle control should show while in this mode
    ///
    /// The control advertises the mode you would switch *to*: a moon in
    /// light mode, a sun in dark mode.
    pub fn control_appearance(self) -> ControlAppearance {
        match self {
            ThemeMode::Light => ControlAppearance {
                icon: "🌙",
                label: "Switch to Dark Mode",
            },
            ThemeMode::Dark => ControlAppearance {
                icon: "☀️",
                label: "Switch to Light Mode",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inversion_is_involutive() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.inverted().inverted(), mode);
        }
    }

    #[test]
    fn test_flag_round_trip() {
        assert_eq!(ThemeMode::from_flag(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_flag(false), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.flag_str(), "true");
        assert_eq!(ThemeMode::Light.flag_str(), "false");
    }

    #[test]
    fn test_control_advertises_target_mode() {
        assert_eq!(ThemeMode::Light.control_appearance().icon, "🌙");
        assert_eq!(ThemeMode::Dark.control_appearance().icon, "☀️");
    }
}
