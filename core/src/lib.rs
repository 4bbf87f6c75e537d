//! Component model for Breaker.
//!
//! Components render into a [`Node`] tree through a [`RenderContext`]. State
//! changes are reported through an [`UpdateSignal`], and the [`Root`] driver
//! re-renders the tree when the signal is pending. A [`ContainmentBoundary`]
//! intercepts render errors raised by its descendants and shows a fallback.

mod component;
mod root;
mod signal;
mod state;
pub mod widgets;

pub use breaker_types::{ActionId, FaultKind, Node, RenderError};
pub use component::{Component, Handler, RenderContext};
pub use root::{Root, RootError};
pub use signal::UpdateSignal;
pub use state::State;
pub use widgets::{BoundaryState, ContainmentBoundary, Fallback, FaultyWidget, Label, Stack};

/// The demo page content: a faulty widget wrapped in a containment boundary.
#[must_use]
pub fn demo_tree(fallback: Fallback) -> ContainmentBoundary<FaultyWidget> {
    ContainmentBoundary::with_fallback(FaultyWidget::new(), fallback)
}
