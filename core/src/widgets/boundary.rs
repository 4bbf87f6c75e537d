use tracing::{error, info};

use breaker_types::{Node, RenderError};

use crate::{Component, RenderContext, UpdateSignal};

const NAME: &str = "ContainmentBoundary";

const DEFAULT_TITLE: &str = "Uh oh!";
const DEFAULT_MESSAGE: &str = "Something's gone wrong. Try refreshing the page.";

/// The static view a boundary shows after containing a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    title: String,
    message: String,
}

impl Fallback {
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn node(&self) -> Node {
        Node::column([Node::heading(&self.title), Node::text(&self.message)])
    }
}

impl Default for Fallback {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_MESSAGE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryState {
    #[default]
    Healthy,
    /// Terminal for the lifetime of the mounted instance.
    Failed,
}

/// Renders its child until the child's render fails, then renders the
/// fallback for good.
///
/// Only faults returned while rendering the child subtree are intercepted.
/// There is no way back to [`BoundaryState::Healthy`] short of unmounting and
/// mounting again.
#[derive(Debug)]
pub struct ContainmentBoundary<C> {
    child: C,
    state: BoundaryState,
    fallback: Fallback,
    last_error: Option<RenderError>,
}

impl<C: Component> ContainmentBoundary<C> {
    #[must_use]
    pub fn new(child: C) -> Self {
        Self::with_fallback(child, Fallback::default())
    }

    #[must_use]
    pub fn with_fallback(child: C, fallback: Fallback) -> Self {
        Self {
            child,
            state: BoundaryState::Healthy,
            fallback,
            last_error: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> BoundaryState {
        self.state
    }

    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.state == BoundaryState::Failed
    }

    /// The fault that moved the boundary to `Failed`.
    #[must_use]
    pub fn last_error(&self) -> Option<&RenderError> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn child(&self) -> &C {
        &self.child
    }

    #[must_use]
    pub fn fallback(&self) -> &Fallback {
        &self.fallback
    }

    fn intercept(&mut self, mut err: RenderError) {
        err.unwound_through(NAME);
        error!(
            kind = %err.kind(),
            fault = %err.message(),
            component_stack = %err.component_trace(),
            "Render fault contained by boundary"
        );
        self.state = BoundaryState::Failed;
        self.last_error = Some(err);
    }
}

impl<C: Component> Component for ContainmentBoundary<C> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mount(&mut self, signal: &UpdateSignal) {
        self.state = BoundaryState::Healthy;
        self.last_error = None;
        self.child.mount(signal);
    }

    fn render(&mut self, cx: &mut RenderContext) -> Result<Node, RenderError> {
        if self.has_failed() {
            return Ok(self.fallback.node());
        }

        let mark = cx.handler_mark();
        match cx.render_child(&mut self.child) {
            Ok(node) => Ok(node),
            Err(err) => {
                cx.discard_handlers_since(mark);
                self.intercept(err);
                Ok(self.fallback.node())
            }
        }
    }

    fn unmount(&mut self) {
        if self.has_failed() {
            info!("Unmounting failed boundary");
        }
        self.child.unmount();
    }
}
