//! Progress-bar width reveals
//!
//! A progress indicator declares a target width but renders at zero until
//! it scrolls into view. On the first visibility crossing the engine
//! cancels the subscription, waits a short settle delay so the zero width
//! is committed before the transition begins, then applies the target
//! width with a smooth ease-out hint, exactly once per bar.
//!
//! The trigger threshold is fixed at 0.5, deliberately stricter than the
//! reveal engine's default: a bar half off-screen animating its width
//! reads as broken, where a card fading in at 15% does not.

use crate::observer::{ViewportObserver, VisibilityEvent};
use crate::scheduler::TaskScheduler;
use shimmer_core::Transition;
use slotmap::{new_key_type, SlotMap};
use std::time::Duration;

new_key_type! {
    /// Handle to a registered progress indicator
    pub struct ProgressId;
}

/// Fraction of a bar that must be visible before its width animates
pub const PROGRESS_VISIBILITY_THRESHOLD: f32 = 0.5;

/// Settle delay between the visibility crossing and the width change
pub const PROGRESS_APPLY_DELAY: Duration = Duration::from_millis(100);

/// Transition hint attached to the width change
pub const PROGRESS_WIDTH_TRANSITION: Transition = Transition::ease_out(Duration::from_secs(1));

/// Presentation seam: width mutations on progress indicators
pub trait ProgressSurface {
    /// Set the bar's width in percent, optionally smoothed by `transition`
    fn set_progress_width(
        &mut self,
        element: ProgressId,
        percent: f32,
        transition: Option<Transition>,
    );
}

#[derive(Clone, Copy, Debug)]
struct ProgressBar {
    target_width: f32,
    animated: bool,
    pending: bool,
    observed: bool,
}

/// Registry of progress indicators awaiting their one-time width reveal
pub struct ProgressEngine {
    bars: SlotMap<ProgressId, ProgressBar>,
    scheduler: TaskScheduler<ProgressId>,
}

impl ProgressEngine {
    pub fn new() -> Self {
        Self {
            bars: SlotMap::with_key(),
            scheduler: TaskScheduler::new(),
        }
    }

    /// Register a bar with its declared target width in percent
    ///
    /// A missing target defaults to zero, and the zero starting width is
    /// applied up front so the later transition has somewhere to go.
    pub fn register<S: ProgressSurface>(
        &mut self,
        target_width: Option<f32>,
        surface: &mut S,
    ) -> ProgressId {
        let target = target_width.unwrap_or(0.0).clamp(0.0, 100.0);
        let id = self.bars.insert(ProgressBar {
            target_width: target,
            animated: false,
            pending: false,
            observed: false,
        });
        surface.set_progress_width(id, 0.0, None);
        id
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Whether the bar's one-time animation has already run
    pub fn is_animated(&self, id: ProgressId) -> bool {
        self.bars.get(id).is_some_and(|b| b.animated)
    }

    /// Declared target width, if the id is known
    pub fn target_width(&self, id: ProgressId) -> Option<f32> {
        self.bars.get(id).map(|b| b.target_width)
    }

    /// Begin visibility subscriptions for every registered bar
    ///
    /// Without the observation capability every target width is applied
    /// immediately, skipping the transition: the same "treat everything
    /// as visible" degradation the reveal engine takes.
    pub fn initialize<S: ProgressSurface>(
        &mut self,
        observer: Option<&mut dyn ViewportObserver<ProgressId>>,
        surface: &mut S,
    ) {
        match observer {
            Some(obs) => {
                for (id, bar) in self.bars.iter_mut() {
                    if !bar.animated {
                        bar.observed = true;
                        obs.observe(id);
                    }
                }
            }
            None => {
                tracing::debug!(
                    bars = self.bars.len(),
                    "viewport observation unavailable, applying progress widths immediately"
                );
                for (id, bar) in self.bars.iter_mut() {
                    if !bar.animated {
                        bar.animated = true;
                        surface.set_progress_width(id, bar.target_width, None);
                    }
                }
            }
        }
    }

    /// Process one visibility-ratio update for a bar
    ///
    /// The first crossing at or above the threshold cancels the
    /// subscription and schedules the width application; everything else
    /// is a no-op, including updates for bars already animated or already
    /// pending.
    pub fn on_visibility(
        &mut self,
        event: VisibilityEvent<ProgressId>,
        observer: &mut dyn ViewportObserver<ProgressId>,
    ) {
        let Some(bar) = self.bars.get_mut(event.target) else {
            return;
        };
        if !bar.observed || bar.animated || bar.pending {
            return;
        }
        if event.ratio >= PROGRESS_VISIBILITY_THRESHOLD {
            bar.pending = true;
            bar.observed = false;
            observer.unobserve(event.target);
            self.scheduler.schedule_in(PROGRESS_APPLY_DELAY, event.target);
        }
    }

    /// Advance time; apply the width for every bar whose delay elapsed
    pub fn advance<S: ProgressSurface>(&mut self, dt: Duration, surface: &mut S) {
        for id in self.scheduler.advance(dt) {
            if let Some(bar) = self.bars.get_mut(id) {
                if bar.animated {
                    continue;
                }
                bar.animated = true;
                bar.pending = false;
                surface.set_progress_width(id, bar.target_width, Some(PROGRESS_WIDTH_TRANSITION));
            }
        }
    }
}

impl Default for ProgressEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockSurface {
        widths: Vec<(ProgressId, f32, Option<Transition>)>,
    }

    impl ProgressSurface for MockSurface {
        fn set_progress_width(
            &mut self,
            element: ProgressId,
            percent: f32,
            transition: Option<Transition>,
        ) {
            self.widths.push((element, percent, transition));
        }
    }

    #[derive(Default)]
    struct MockObserver {
        observed: Vec<ProgressId>,
        unobserved: Vec<ProgressId>,
    }

    impl ViewportObserver<ProgressId> for MockObserver {
        fn observe(&mut self, element: ProgressId) {
            self.observed.push(element);
        }

        fn unobserve(&mut self, element: ProgressId) {
            self.unobserved.push(element);
        }
    }

    #[test]
    fn test_width_starts_at_zero() {
        let mut engine = ProgressEngine::new();
        let mut surface = MockSurface::default();

        let id = engine.register(Some(80.0), &mut surface);
        assert_eq!(surface.widths, vec![(id, 0.0, None)]);
        assert!(!engine.is_animated(id));
    }

    #[test]
    fn test_first_crossing_animates_exactly_once() {
        let mut engine = ProgressEngine::new();
        let mut observer = MockObserver::default();
        let mut surface = MockSurface::default();

        let id = engine.register(Some(80.0), &mut surface);
        engine.initialize(Some(&mut observer), &mut surface);

        engine.on_visibility(VisibilityEvent::new(id, 0.6), &mut observer);
        assert_eq!(observer.unobserved, vec![id]);

        // width unchanged until the settle delay elapses
        assert_eq!(surface.widths.len(), 1);
        engine.advance(PROGRESS_APPLY_DELAY, &mut surface);

        assert!(engine.is_animated(id));
        assert_eq!(surface.widths.len(), 2);
        let (_, percent, transition) = surface.widths[1];
        assert_eq!(percent, 80.0);
        assert_eq!(transition, Some(PROGRESS_WIDTH_TRANSITION));

        // a second crossing is a no-op
        engine.on_visibility(VisibilityEvent::new(id, 0.9), &mut observer);
        engine.advance(Duration::from_secs(1), &mut surface);
        assert_eq!(surface.widths.len(), 2);
        assert_eq!(observer.unobserved.len(), 1);
    }

    #[test]
    fn test_below_threshold_does_not_trigger() {
        let mut engine = ProgressEngine::new();
        let mut observer = MockObserver::default();
        let mut surface = MockSurface::default();

        let id = engine.register(Some(40.0), &mut surface);
        engine.initialize(Some(&mut observer), &mut surface);

        engine.on_visibility(VisibilityEvent::new(id, 0.49), &mut observer);
        engine.advance(Duration::from_secs(1), &mut surface);

        assert!(!engine.is_animated(id));
        assert_eq!(surface.widths.len(), 1);
        assert!(observer.unobserved.is_empty());
    }

    #[test]
    fn test_repeat_crossing_before_delay_schedules_once() {
        let mut engine = ProgressEngine::new();
        let mut observer = MockObserver::default();
        let mut surface = MockSurface::default();

        let id = engine.register(Some(60.0), &mut surface);
        engine.initialize(Some(&mut observer), &mut surface);

        engine.on_visibility(VisibilityEvent::new(id, 0.7), &mut observer);
        engine.on_visibility(VisibilityEvent::new(id, 0.8), &mut observer);
        engine.advance(PROGRESS_APPLY_DELAY, &mut surface);

        // one zero-width application plus one animated application
        assert_eq!(surface.widths.len(), 2);
    }

    #[test]
    fn test_missing_target_defaults_to_zero() {
        let mut engine = ProgressEngine::new();
        let mut observer = MockObserver::default();
        let mut surface = MockSurface::default();

        let id = engine.register(None, &mut surface);
        engine.initialize(Some(&mut observer), &mut surface);
        engine.on_visibility(VisibilityEvent::new(id, 1.0), &mut observer);
        engine.advance(PROGRESS_APPLY_DELAY, &mut surface);

        let (_, percent, _) = surface.widths[1];
        assert_eq!(percent, 0.0);
    }

    #[test]
    fn test_fallback_applies_widths_immediately() {
        let mut engine = ProgressEngine::new();
        let mut surface = MockSurface::default();

        let id = engine.register(Some(75.0), &mut surface);
        engine.initialize(None, &mut surface);

        assert!(engine.is_animated(id));
        let (_, percent, transition) = surface.widths[1];
        assert_eq!(percent, 75.0);
        assert_eq!(transition, None);
    }

    #[test]
    fn test_target_width_is_clamped() {
        let mut engine = ProgressEngine::new();
        let mut surface = MockSurface::default();

        let id = engine.register(Some(140.0), &mut surface);
        assert_eq!(engine.target_width(id), Some(100.0));
    }
}
