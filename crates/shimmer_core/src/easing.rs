//! Easing curves
//!
//! Shapes the progress of timed transitions. Curves map a normalized time
//! `t` in `[0, 1]` to an eased progress value, also in `[0, 1]`.

/// An easing curve for interpolating transition progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant-rate interpolation
    #[default]
    Linear,
    /// Quadratic acceleration from rest
    EaseIn,
    /// Quadratic deceleration to rest
    EaseOut,
    /// Acceleration until halfway, then deceleration
    EaseInOut,
}

impl Easing {
    /// Map normalized time `t` to eased progress
    ///
    /// Input is clamped to `[0, 1]`, so callers can pass raw
    /// `elapsed / duration` ratios without pre-clamping.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_clamps_out_of_range_input() {
        assert_eq!(Easing::EaseOut.apply(-0.5), 0.0);
        assert_eq!(Easing::EaseOut.apply(1.5), 1.0);
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
    }

    #[test]
    fn test_ease_in_out_symmetry() {
        let lo = Easing::EaseInOut.apply(0.25);
        let hi = Easing::EaseInOut.apply(0.75);
        assert!((lo + hi - 1.0).abs() < 1e-6);
    }
}
