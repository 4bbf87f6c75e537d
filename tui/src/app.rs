//! Page state for the terminal host.

use std::mem;

use tracing::info;

use breaker_core::{ActionId, Component, Fallback, Node, Root, RootError, demo_tree};

use crate::UiOptions;

/// Builds a fresh component tree. Called once at start and on every refresh.
pub type TreeFactory = Box<dyn Fn() -> Box<dyn Component>>;

/// The page: a mounted tree plus the host-side focus and refresh bookkeeping.
pub struct PageApp {
    factory: TreeFactory,
    root: Root,
    focus: usize,
    refreshes: u32,
    options: UiOptions,
}

impl PageApp {
    pub fn new(
        factory: impl Fn() -> Box<dyn Component> + 'static,
        options: UiOptions,
    ) -> Result<Self, RootError> {
        let factory: TreeFactory = Box::new(factory);
        let root = Root::mount_boxed(factory())?;
        Ok(Self {
            factory,
            root,
            focus: 0,
            refreshes: 0,
            options,
        })
    }

    /// The demo page: a faulty widget inside a containment boundary.
    pub fn demo(fallback: Fallback, options: UiOptions) -> Result<Self, RootError> {
        Self::new(
            move || Box::new(demo_tree(fallback.clone())) as Box<dyn Component>,
            options,
        )
    }

    #[must_use]
    pub fn root(&self) -> &Root {
        &self.root
    }

    #[must_use]
    pub fn frame(&self) -> Option<&Node> {
        self.root.frame()
    }

    #[must_use]
    pub fn options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn refreshes(&self) -> u32 {
        self.refreshes
    }

    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    fn button_count(&self) -> usize {
        self.frame().map_or(0, |node| node.buttons().len())
    }

    #[must_use]
    pub fn focused_action(&self) -> Option<ActionId> {
        self.frame()?
            .buttons()
            .get(self.focus)
            .map(|(_, action)| *action)
    }

    pub fn focus_next(&mut self) {
        let count = self.button_count();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.button_count();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Press the focused button. Returns whether a handler ran.
    pub fn activate_focused(&mut self) -> bool {
        match self.focused_action() {
            Some(action) => self.root.activate(action),
            None => false,
        }
    }

    /// Run the re-render the tree asked for, if any.
    pub fn tick(&mut self) -> Result<bool, RootError> {
        let rendered = self.root.flush()?;
        if rendered {
            let count = self.button_count();
            if self.focus >= count {
                self.focus = count.saturating_sub(1);
            }
        }
        Ok(rendered)
    }

    /// Tear the tree down and mount a fresh one. The only way to bring a
    /// failed boundary back.
    pub fn refresh(&mut self) -> Result<(), RootError> {
        let fresh = Root::mount_boxed((self.factory)())?;
        let stale = mem::replace(&mut self.root, fresh);
        stale.unmount();
        self.focus = 0;
        self.refreshes += 1;
        info!(refreshes = self.refreshes, "Page refreshed");
        Ok(())
    }
}
