//! Transient decorative effects
//!
//! Short-lived presentation states (a shake on a wrong answer, a press
//! ripple, a timed notice) that apply immediately and clear themselves
//! after a fixed lifetime. Removal goes through the task scheduler, so a
//! re-trigger can cancel the pending clear and restart the lifetime, the
//! way a second press replaces a still-expanding ripple.

use crate::scheduler::{TaskId, TaskScheduler};
use slotmap::{new_key_type, SlotMap};
use std::time::Duration;

new_key_type! {
    /// Handle to a live transient effect
    pub struct EffectId;
}

/// Kinds of transient effects and their lifetimes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    /// Horizontal shake, used for wrong-answer feedback
    Shake,
    /// Expanding press ripple
    Ripple,
    /// Timed notice with a caller-chosen lifetime
    Notice(Duration),
}

impl EffectKind {
    /// How long the effect stays active before clearing
    pub fn lifetime(self) -> Duration {
        match self {
            EffectKind::Shake => Duration::from_millis(500),
            EffectKind::Ripple => Duration::from_millis(600),
            EffectKind::Notice(duration) => duration,
        }
    }
}

/// Presentation seam: applying and clearing effect states
pub trait EffectSurface {
    fn set_effect_active(&mut self, element: EffectId, kind: EffectKind, active: bool);
}

struct ActiveEffect {
    kind: EffectKind,
    clear_task: TaskId,
}

/// Registry of currently active transient effects
pub struct EffectEngine {
    active: SlotMap<EffectId, ActiveEffect>,
    scheduler: TaskScheduler<EffectId>,
}

impl EffectEngine {
    pub fn new() -> Self {
        Self {
            active: SlotMap::with_key(),
            scheduler: TaskScheduler::new(),
        }
    }

    /// Apply an effect and schedule its removal
    pub fn trigger<S: EffectSurface>(&mut self, kind: EffectKind, surface: &mut S) -> EffectId {
        let id = self.active.insert(ActiveEffect {
            kind,
            clear_task: TaskId::default(),
        });
        let task = self.scheduler.schedule_in(kind.lifetime(), id);
        self.active[id].clear_task = task;
        surface.set_effect_active(id, kind, true);
        tracing::trace!(?kind, "effect triggered");
        id
    }

    /// Restart a live effect's lifetime, replacing the pending clear
    ///
    /// Returns `false` if the effect already cleared.
    pub fn retrigger<S: EffectSurface>(&mut self, id: EffectId, surface: &mut S) -> bool {
        let Some(effect) = self.active.get(id) else {
            return false;
        };
        let kind = effect.kind;
        self.scheduler.cancel(effect.clear_task);
        let task = self.scheduler.schedule_in(kind.lifetime(), id);
        self.active[id].clear_task = task;
        surface.set_effect_active(id, kind, true);
        true
    }

    /// Whether the effect is still applied
    pub fn is_active(&self, id: EffectId) -> bool {
        self.active.contains_key(id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Advance time and clear every effect whose lifetime elapsed
    pub fn advance<S: EffectSurface>(&mut self, dt: Duration, surface: &mut S) {
        for id in self.scheduler.advance(dt) {
            if let Some(effect) = self.active.remove(id) {
                surface.set_effect_active(id, effect.kind, false);
            }
        }
    }
}

impl Default for EffectEngine {
    fn default() -> Self {
        Self::new()
    }
}
