//! Entrance stagger helpers
//!
//! Cards and list options enter with a small per-index delay so a group
//! cascades instead of popping in at once. Hosts with a fixed set of
//! delay classes use the capped slot mapping instead of raw durations.

use std::time::Duration;

/// Delay step between successive card entrances
pub const CARD_STAGGER_STEP: Duration = Duration::from_millis(100);

/// Delay step between successive option entrances
pub const OPTION_STAGGER_STEP: Duration = Duration::from_millis(50);

/// Highest delay slot; later elements share it
pub const MAX_DELAY_SLOT: usize = 6;

/// Per-index entrance delays: `index * step`
pub fn stagger_delays(count: usize, step: Duration) -> impl Iterator<Item = Duration> {
    (0..count).map(move |index| step * index as u32)
}

/// 1-based delay slot for element `index`, capped at [`MAX_DELAY_SLOT`]
pub fn delay_slot(index: usize) -> usize {
    (index + 1).min(MAX_DELAY_SLOT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_scale_with_index() {
        let delays: Vec<Duration> = stagger_delays(4, CARD_STAGGER_STEP).collect();
        assert_eq!(
            delays,
            vec![
                Duration::ZERO,
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(300),
            ]
        );
    }

    #[test]
    fn test_option_step_is_finer() {
        let delays: Vec<Duration> = stagger_delays(2, OPTION_STAGGER_STEP).collect();
        assert_eq!(delays[1], Duration::from_millis(50));
    }

    #[test]
    fn test_delay_slots_cap() {
        assert_eq!(delay_slot(0), 1);
        assert_eq!(delay_slot(4), 5);
        assert_eq!(delay_slot(5), 6);
        assert_eq!(delay_slot(50), 6);
    }
}
