//! Counter animations
//!
//! Stat values count up from zero to their displayed number over a fixed
//! second, preserving the unit suffix of the original text (`85%` counts
//! `0% .. 85%`). A counter animates once; re-starting a finished counter
//! is a no-op so partial host updates cannot replay the effect.

use shimmer_core::Easing;
use slotmap::{new_key_type, SlotMap};
use std::time::Duration;

new_key_type! {
    /// Handle to a registered counter
    pub struct CounterId;
}

/// Fixed duration of the count-up
pub const COUNTER_DURATION: Duration = Duration::from_secs(1);

/// Presentation seam: text mutations on counter elements
pub trait CounterSurface {
    fn set_counter_text(&mut self, element: CounterId, text: &str);
}

/// Unit suffix preserved from the counter's original text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CounterSuffix {
    #[default]
    None,
    Percent,
    Hours,
    Minutes,
}

impl CounterSuffix {
    /// Detect the suffix of the original display text
    ///
    /// Precedence is percent, then hours, then minutes, matching how
    /// mixed strings like `"2h 30m"` are rendered once animated.
    pub fn detect(text: &str) -> Self {
        if text.contains('%') {
            CounterSuffix::Percent
        } else if text.contains('h') {
            CounterSuffix::Hours
        } else if text.contains('m') {
            CounterSuffix::Minutes
        } else {
            CounterSuffix::None
        }
    }

    /// Format `value` with this suffix
    pub fn format(self, value: u64) -> String {
        match self {
            CounterSuffix::None => value.to_string(),
            CounterSuffix::Percent => format!("{value}%"),
            CounterSuffix::Hours => format!("{value}h"),
            CounterSuffix::Minutes => format!("{value}m"),
        }
    }
}

/// Parse the numeric target out of display text, ignoring separators
///
/// Non-numeric text yields zero rather than an error; a counter showing
/// a dash simply stays at zero.
fn parse_target(text: &str) -> u64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

#[derive(Clone, Copy, Debug)]
struct CounterAnimation {
    target: u64,
    suffix: CounterSuffix,
    elapsed: Duration,
    running: bool,
    animated: bool,
}

/// Registry of counter elements and their count-up state
pub struct CounterEngine {
    counters: SlotMap<CounterId, CounterAnimation>,
}

impl CounterEngine {
    pub fn new() -> Self {
        Self {
            counters: SlotMap::with_key(),
        }
    }

    /// Register a counter from its original display text
    pub fn register(&mut self, original_text: &str) -> CounterId {
        self.counters.insert(CounterAnimation {
            target: parse_target(original_text),
            suffix: CounterSuffix::detect(original_text),
            elapsed: Duration::ZERO,
            running: false,
            animated: false,
        })
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Start a counter's count-up; finished counters never restart
    pub fn start(&mut self, id: CounterId) {
        if let Some(counter) = self.counters.get_mut(id) {
            if !counter.animated && !counter.running {
                counter.running = true;
                counter.elapsed = Duration::ZERO;
            }
        }
    }

    /// Start every registered counter that has not yet animated
    pub fn start_all(&mut self) {
        let ids: Vec<CounterId> = self.counters.keys().collect();
        for id in ids {
            self.start(id);
        }
    }

    pub fn is_running(&self, id: CounterId) -> bool {
        self.counters.get(id).is_some_and(|c| c.running)
    }

    /// Whether the count-up has completed
    pub fn is_finished(&self, id: CounterId) -> bool {
        self.counters.get(id).is_some_and(|c| c.animated)
    }

    /// Advance all running counters, writing interpolated text
    ///
    /// At completion the exact target is written and the counter becomes
    /// terminal, so rounding during interpolation can never leave a stale
    /// final value.
    pub fn advance<S: CounterSurface>(&mut self, dt: Duration, surface: &mut S) {
        for (id, counter) in self.counters.iter_mut() {
            if !counter.running {
                continue;
            }
            counter.elapsed += dt;
            if counter.elapsed >= COUNTER_DURATION {
                counter.running = false;
                counter.animated = true;
                surface.set_counter_text(id, &counter.suffix.format(counter.target));
            } else {
                let t = counter.elapsed.as_secs_f32() / COUNTER_DURATION.as_secs_f32();
                let value = (counter.target as f32 * Easing::Linear.apply(t)).floor() as u64;
                surface.set_counter_text(id, &counter.suffix.format(value));
            }
        }
    }
}

impl Default for CounterEngine {
    fn default() -> Self {
        Self::new()
    }
}
