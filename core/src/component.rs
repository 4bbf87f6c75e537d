//! The component contract and the per-pass render context.

use breaker_types::{ActionId, Node, RenderError};

use crate::UpdateSignal;

/// Callback registered by a button during a render pass.
pub type Handler = Box<dyn Fn()>;

/// A piece of UI that renders into a [`Node`].
///
/// Raising an error means returning `Err` from [`Component::render`]. The error
/// travels up through every ancestor's [`RenderContext::render_child`] call
/// until a boundary intercepts it or it reaches the driver.
pub trait Component {
    fn name(&self) -> &'static str;

    /// Create component state, wiring it to the driver's signal.
    fn mount(&mut self, _signal: &UpdateSignal) {}

    fn render(&mut self, cx: &mut RenderContext) -> Result<Node, RenderError>;

    fn unmount(&mut self) {}
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn mount(&mut self, signal: &UpdateSignal) {
        (**self).mount(signal);
    }

    fn render(&mut self, cx: &mut RenderContext) -> Result<Node, RenderError> {
        (**self).render(cx)
    }

    fn unmount(&mut self) {
        (**self).unmount();
    }
}

/// State of one render pass: the handlers registered so far.
#[derive(Default)]
pub struct RenderContext {
    handlers: Vec<Handler>,
}

impl RenderContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `on_press` and return the button node that triggers it.
    pub fn button(&mut self, label: impl Into<String>, on_press: impl Fn() + 'static) -> Node {
        let action = ActionId::new(self.handlers.len() as u32);
        self.handlers.push(Box::new(on_press));
        Node::Button {
            label: label.into(),
            action,
        }
    }

    /// Render a descendant. A failing child is recorded on the error's
    /// component stack before the error is returned.
    pub fn render_child<C>(&mut self, child: &mut C) -> Result<Node, RenderError>
    where
        C: Component + ?Sized,
    {
        child.render(self).map_err(|mut err| {
            err.unwound_through(child.name());
            err
        })
    }

    /// Position in the handler table, for [`Self::discard_handlers_since`].
    #[must_use]
    pub fn handler_mark(&self) -> usize {
        self.handlers.len()
    }

    /// Drop handlers registered after `mark`, e.g. by a subtree that failed.
    pub fn discard_handlers_since(&mut self, mark: usize) {
        self.handlers.truncate(mark);
    }

    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub(crate) fn into_handlers(self) -> Vec<Handler> {
        self.handlers
    }
}
