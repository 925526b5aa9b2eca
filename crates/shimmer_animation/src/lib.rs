//! Shimmer Animation Engines
//!
//! Event-driven engines for cosmetic presentation behaviors:
//!
//! - **Reveal**: visibility-driven entrance animations with one-shot and
//!   repeatable elements, and a defined fallback when the host platform
//!   cannot observe visibility at all
//! - **Progress**: one-time width transitions for progress indicators,
//!   deferred until the indicator scrolls into view
//! - **Counter**: numeric count-up animations that preserve unit suffixes
//! - **Effects**: transient decorative states (shake, ripple, notices)
//!   with scheduled removal
//! - **Scheduler**: deterministic deferred-task scheduling with
//!   cancellation tokens; time only moves when the host advances it
//!
//! Engines never touch a real rendering surface. Each declares a narrow
//! trait at its seam (`RevealSurface`, `ProgressSurface`, ...) and the
//! host adapts it to whatever actually draws the page, which keeps every
//! policy decision testable with mock surfaces and simulated time.

pub mod counter;
pub mod effects;
pub mod observer;
pub mod progress;
pub mod reveal;
pub mod scheduler;
pub mod stagger;

pub use counter::{CounterEngine, CounterId, CounterSuffix, CounterSurface, COUNTER_DURATION};
pub use effects::{EffectEngine, EffectId, EffectKind, EffectSurface};
pub use observer::{ViewportObserver, VisibilityEvent};
pub use progress::{
    ProgressEngine, ProgressId, ProgressSurface, PROGRESS_APPLY_DELAY,
    PROGRESS_VISIBILITY_THRESHOLD, PROGRESS_WIDTH_TRANSITION,
};
pub use reveal::{
    reduce, RevealDirective, RevealEngine, RevealId, RevealSnapshot, RevealSurface,
    DEFAULT_REVEAL_THRESHOLD,
};
pub use scheduler::{TaskId, TaskScheduler};
pub use stagger::{
    delay_slot, stagger_delays, CARD_STAGGER_STEP, MAX_DELAY_SLOT, OPTION_STAGGER_STEP,
};
