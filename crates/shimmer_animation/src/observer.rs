//! Viewport observation seam
//!
//! The platform's area-intersection primitive, reduced to the two calls
//! the engines need. Hosts route the platform's visibility notifications
//! back into the engines as [`VisibilityEvent`]s; an engine that is handed
//! no observer at initialization takes its defined fallback path instead.

/// Subscription management for element visibility
///
/// `Id` is the engine-specific element key (`RevealId`, `ProgressId`), so
/// a subscription made by one engine can never be cancelled by another.
pub trait ViewportObserver<Id> {
    /// Begin delivering visibility-ratio updates for `element`
    fn observe(&mut self, element: Id);

    /// Stop delivering updates for `element`
    ///
    /// After this call the engine treats the element as terminal; any
    /// update still in flight is dropped on arrival.
    fn unobserve(&mut self, element: Id);
}

/// A visibility-ratio update for one observed element
///
/// `ratio` is the fraction of the element's rendered area currently
/// intersecting the viewport, in `[0, 1]`. Updates for a given element
/// arrive in ratio-change order; nothing is guaranteed across elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityEvent<Id> {
    pub target: Id,
    pub ratio: f32,
}

impl<Id> VisibilityEvent<Id> {
    pub fn new(target: Id, ratio: f32) -> Self {
        Self { target, ratio }
    }
}
