use std::fmt;

use breaker_types::{Node, RenderError};

use crate::{Component, RenderContext, UpdateSignal};

/// Renders its children top to bottom. Faults pass straight through.
#[derive(Default)]
pub struct Stack {
    children: Vec<Box<dyn Component>>,
}

impl Stack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, child: impl Component + 'static) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: impl Component + 'static) {
        self.children.push(Box::new(child));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Component for Stack {
    fn name(&self) -> &'static str {
        "Stack"
    }

    fn mount(&mut self, signal: &UpdateSignal) {
        for child in &mut self.children {
            child.mount(signal);
        }
    }

    fn render(&mut self, cx: &mut RenderContext) -> Result<Node, RenderError> {
        self.children
            .iter_mut()
            .map(|child| cx.render_child(child.as_mut()))
            .collect::<Result<Vec<_>, _>>()
            .map(Node::Column)
    }

    fn unmount(&mut self) {
        for child in &mut self.children {
            child.unmount();
        }
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.children.iter().map(|child| child.name()))
            .finish()
    }
}

/// Static text.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
}

impl Label {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Component for Label {
    fn name(&self) -> &'static str {
        "Label"
    }

    fn render(&mut self, _cx: &mut RenderContext) -> Result<Node, RenderError> {
        Ok(Node::text(&self.text))
    }
}
