//! Visibility-driven reveal animations
//!
//! Elements register for scroll-triggered entrance animation and the
//! engine toggles their "revealed" presentation state as visibility
//! notifications arrive. Policy is split from plumbing: a pure reducer
//! ([`reduce`]) turns one visibility update into a [`RevealDirective`],
//! and the engine applies directives through the [`RevealSurface`] seam
//! while managing subscriptions through [`ViewportObserver`].
//!
//! One-shot elements reveal exactly once and then stop being observed;
//! repeatable elements track the ratio-vs-threshold comparison exactly,
//! oscillating as the element scrolls in and out.
//!
//! When the host platform has no visibility-observation capability the
//! engine degrades by revealing every registered element immediately.
//! That path is a defined fallback, not an error.

use crate::observer::{ViewportObserver, VisibilityEvent};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to an element registered for reveal animation
    pub struct RevealId;
}

/// Default fraction of an element's area that must intersect the viewport
/// for the element to count as visible
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.15;

/// Presentation seam: the one mutation the reveal engine performs
pub trait RevealSurface {
    /// Apply or remove the revealed presentation state for `element`
    fn set_revealed(&mut self, element: RevealId, revealed: bool);
}

/// The inputs the reveal policy needs about one element
#[derive(Clone, Copy, Debug)]
pub struct RevealSnapshot {
    /// Last applied revealed state
    pub revealed: bool,
    /// Whether the element stops reacting once revealed
    pub one_shot: bool,
}

/// What one visibility update asks the engine to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealDirective {
    /// Revealed state the element should now have
    pub revealed: bool,
    /// Whether the element's subscription should be cancelled
    pub unsubscribe: bool,
}

/// Pure reveal policy
///
/// At or above the threshold the element reveals, terminally so for
/// one-shot elements. Below the threshold a repeatable element un-reveals;
/// a one-shot element keeps whatever state it has (it never reverts once
/// revealed, and simply stays unrevealed before that).
pub fn reduce(snapshot: RevealSnapshot, ratio: f32, threshold: f32) -> RevealDirective {
    if ratio >= threshold {
        RevealDirective {
            revealed: true,
            unsubscribe: snapshot.one_shot,
        }
    } else if snapshot.one_shot {
        RevealDirective {
            revealed: snapshot.revealed,
            unsubscribe: false,
        }
    } else {
        RevealDirective {
            revealed: false,
            unsubscribe: false,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct RevealState {
    one_shot: bool,
    revealed: bool,
    observed: bool,
}

/// Registry of elements animated on scroll
///
/// The host registers each tagged element, hands the returned [`RevealId`]
/// to its platform observation layer, and routes visibility notifications
/// back in. All state lives here; the surface only ever hears about
/// changes.
pub struct RevealEngine {
    elements: SlotMap<RevealId, RevealState>,
    threshold: f32,
}

impl RevealEngine {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_REVEAL_THRESHOLD)
    }

    /// Create an engine with a custom visibility threshold, clamped to `[0, 1]`
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            elements: SlotMap::with_key(),
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Register an element tagged for scroll animation
    ///
    /// The element starts unrevealed and unobserved; call
    /// [`initialize`](Self::initialize) to begin subscriptions.
    pub fn register(&mut self, one_shot: bool) -> RevealId {
        self.elements.insert(RevealState {
            one_shot,
            revealed: false,
            observed: false,
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Last applied revealed state; `false` for unknown ids
    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.elements.get(id).is_some_and(|s| s.revealed)
    }

    /// Whether the element still has a live subscription
    pub fn is_observed(&self, id: RevealId) -> bool {
        self.elements.get(id).is_some_and(|s| s.observed)
    }

    /// Begin visibility subscriptions for every registered element
    ///
    /// With an observer, each element is subscribed and waits for its
    /// first ratio update. Without one (`observer = None`) the platform
    /// lacks the capability: every element is revealed immediately and
    /// left unobserved, so any stray events that arrive later are
    /// dropped and the revealed state is terminal.
    pub fn initialize<S: RevealSurface>(
        &mut self,
        observer: Option<&mut dyn ViewportObserver<RevealId>>,
        surface: &mut S,
    ) {
        match observer {
            Some(obs) => {
                for (id, state) in self.elements.iter_mut() {
                    state.observed = true;
                    obs.observe(id);
                }
            }
            None => {
                tracing::debug!(
                    elements = self.elements.len(),
                    "viewport observation unavailable, revealing all elements"
                );
                for (id, state) in self.elements.iter_mut() {
                    state.observed = false;
                    if !state.revealed {
                        state.revealed = true;
                        surface.set_revealed(id, true);
                    }
                }
            }
        }
    }

    /// Process one visibility-ratio update
    ///
    /// Updates for unknown or no-longer-observed elements are dropped.
    pub fn on_visibility<S: RevealSurface>(
        &mut self,
        event: VisibilityEvent<RevealId>,
        observer: &mut dyn ViewportObserver<RevealId>,
        surface: &mut S,
    ) {
        let Some(state) = self.elements.get_mut(event.target) else {
            return;
        };
        if !state.observed {
            return;
        }

        let directive = reduce(
            RevealSnapshot {
                revealed: state.revealed,
                one_shot: state.one_shot,
            },
            event.ratio,
            self.threshold,
        );

        if directive.revealed != state.revealed {
            state.revealed = directive.revealed;
            surface.set_revealed(event.target, directive.revealed);
        }
        if directive.unsubscribe {
            state.observed = false;
            observer.unobserve(event.target);
        }
    }

    /// Process a batch of visibility updates in delivery order
    pub fn on_visibility_batch<S: RevealSurface>(
        &mut self,
        events: &[VisibilityEvent<RevealId>],
        observer: &mut dyn ViewportObserver<RevealId>,
        surface: &mut S,
    ) {
        for event in events {
            self.on_visibility(*event, observer, surface);
        }
    }
}

impl Default for RevealEngine {
    fn default() -> Self {
        Self::new()
    }
}
