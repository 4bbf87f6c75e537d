//! The render driver.

use thiserror::Error;
use tracing::{error, info, warn};

use breaker_types::{ActionId, Node, RenderError};

use crate::{Component, Handler, RenderContext, UpdateSignal};

#[derive(Debug, Error)]
pub enum RootError {
    /// A render fault no boundary intercepted. The whole page has failed.
    #[error("render fault escaped every boundary: {0}")]
    Uncaught(#[from] RenderError),
}

/// Owns a mounted component tree and re-renders it when its state changes.
///
/// State changes only mark the shared [`UpdateSignal`] as pending; the host
/// calls [`Root::flush`] on its own turn to run the pass.
pub struct Root {
    tree: Box<dyn Component>,
    signal: UpdateSignal,
    handlers: Vec<Handler>,
    frame: Option<Node>,
    passes: u64,
}

impl Root {
    /// Mount `tree` and run the initial render.
    pub fn mount(tree: impl Component + 'static) -> Result<Self, RootError> {
        Self::mount_boxed(Box::new(tree))
    }

    pub fn mount_boxed(mut tree: Box<dyn Component>) -> Result<Self, RootError> {
        let signal = UpdateSignal::new();
        tree.mount(&signal);
        info!(root = tree.name(), "Mounted component tree");

        let mut root = Self {
            tree,
            signal,
            handlers: Vec::new(),
            frame: None,
            passes: 0,
        };
        root.render()?;
        Ok(root)
    }

    /// Run one render pass over the whole tree.
    ///
    /// On an uncaught fault the handler table and the current frame are
    /// cleared: nothing on the page can be trusted any more.
    pub fn render(&mut self) -> Result<&Node, RootError> {
        self.signal.take_pending();
        self.passes += 1;

        let mut cx = RenderContext::new();
        match cx.render_child(self.tree.as_mut()) {
            Ok(node) => {
                self.handlers = cx.into_handlers();
                Ok(&*self.frame.insert(node))
            }
            Err(err) => {
                self.handlers.clear();
                self.frame = None;
                error!(
                    kind = %err.kind(),
                    fault = %err.message(),
                    component_stack = %err.component_trace(),
                    "Uncaught render fault"
                );
                Err(RootError::Uncaught(err))
            }
        }
    }

    /// Re-render if a state change is pending. Returns whether a pass ran.
    pub fn flush(&mut self) -> Result<bool, RootError> {
        if !self.signal.is_pending() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Invoke the handler behind `action` from the most recent pass.
    ///
    /// Returns `false` if the id is unknown to that pass.
    pub fn activate(&mut self, action: ActionId) -> bool {
        match self.handlers.get(action.index()) {
            Some(handler) => {
                handler();
                true
            }
            None => {
                warn!(%action, "Ignoring stale or unknown action");
                false
            }
        }
    }

    /// The node tree from the last successful pass, or `None` once an
    /// uncaught fault has taken the page down.
    #[must_use]
    pub fn frame(&self) -> Option<&Node> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.frame.is_none()
    }

    #[must_use]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    #[must_use]
    pub fn signal(&self) -> &UpdateSignal {
        &self.signal
    }

    /// Destroy the tree and all component state.
    pub fn unmount(mut self) {
        self.tree.unmount();
        info!(root = self.tree.name(), passes = self.passes, "Unmounted component tree");
    }
}
