//! Simulated scroll-through of a page with reveal cards and a progress bar
//!
//! Run with `cargo run --example scroll_reveal`. A console surface prints
//! every presentation change as scripted visibility ratios play out.

use shimmer_animation::{
    ProgressEngine, ProgressId, ProgressSurface, RevealEngine, RevealId, RevealSurface,
    ViewportObserver, VisibilityEvent, PROGRESS_APPLY_DELAY,
};
use shimmer_core::Transition;
use std::time::Duration;

struct ConsoleSurface;

impl RevealSurface for ConsoleSurface {
    fn set_revealed(&mut self, element: RevealId, revealed: bool) {
        println!("  card {element:?} -> revealed={revealed}");
    }
}

impl ProgressSurface for ConsoleSurface {
    fn set_progress_width(
        &mut self,
        element: ProgressId,
        percent: f32,
        transition: Option<Transition>,
    ) {
        match transition {
            Some(t) => println!("  bar {element:?} -> {percent}% over {:?}", t.duration),
            None => println!("  bar {element:?} -> {percent}%"),
        }
    }
}

#[derive(Default)]
struct LoggingObserver;

impl<Id: std::fmt::Debug> ViewportObserver<Id> for LoggingObserver {
    fn observe(&mut self, element: Id) {
        println!("  observing {element:?}");
    }

    fn unobserve(&mut self, element: Id) {
        println!("  unobserving {element:?}");
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut surface = ConsoleSurface;
    let mut observer = LoggingObserver;

    let mut reveals = RevealEngine::new();
    let repeatable = reveals.register(false);
    let once = reveals.register(true);

    let mut bars = ProgressEngine::new();
    let bar = bars.register(Some(80.0), &mut surface);

    println!("initializing:");
    reveals.initialize(Some(&mut observer), &mut surface);
    bars.initialize(Some(&mut observer), &mut surface);

    // scroll down past everything, then back up
    let script: &[(f32, f32, f32)] = &[
        (0.0, 0.0, 0.0),
        (0.2, 0.1, 0.3),
        (0.8, 0.6, 0.7),
        (0.1, 0.05, 0.2),
        (0.0, 0.0, 0.0),
    ];

    for (step, &(a, b, p)) in script.iter().enumerate() {
        println!("scroll step {step}:");
        reveals.on_visibility_batch(
            &[
                VisibilityEvent::new(repeatable, a),
                VisibilityEvent::new(once, b),
            ],
            &mut observer,
            &mut surface,
        );
        bars.on_visibility(VisibilityEvent::new(bar, p), &mut observer);
        bars.advance(PROGRESS_APPLY_DELAY, &mut surface);
    }

    println!("settling:");
    bars.advance(Duration::from_secs(1), &mut surface);
    println!(
        "final: repeatable={} once={} bar_animated={}",
        reveals.is_revealed(repeatable),
        reveals.is_revealed(once),
        bars.is_animated(bar),
    );
}
