//! Transition hints
//!
//! A [`Transition`] describes how a surface should smooth a property change:
//! a bounded duration and an easing curve. It is plain data: the engines
//! attach it to mutations and the hosting surface interprets it however its
//! renderer allows. A surface that cannot animate may apply the change
//! instantly; the hint never affects the final value.

use crate::easing::Easing;
use std::time::Duration;

/// A smooth-transition hint attached to a presentation-state change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Bounded duration of the transition
    pub duration: Duration,
    /// Easing curve shaping the transition
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Decelerating transition, the usual choice for entrance effects
    pub const fn ease_out(duration: Duration) -> Self {
        Self::new(duration, Easing::EaseOut)
    }

    /// Symmetric transition, the usual choice for cross-fades
    pub const fn ease_in_out(duration: Duration) -> Self {
        Self::new(duration, Easing::EaseInOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_carry_easing() {
        let t = Transition::ease_out(Duration::from_secs(1));
        assert_eq!(t.easing, Easing::EaseOut);
        assert_eq!(t.duration, Duration::from_secs(1));

        let t = Transition::ease_in_out(Duration::from_millis(300));
        assert_eq!(t.easing, Easing::EaseInOut);
    }
}
