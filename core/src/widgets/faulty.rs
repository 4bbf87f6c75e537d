use breaker_types::{Node, RenderError};

use crate::{Component, RenderContext, State, UpdateSignal};

const NAME: &str = "FaultyWidget";

pub const BREAK_LABEL: &str = "Break it";
pub const FAULT_MESSAGE: &str = "Whoopsie!";

/// A button that, once pressed, makes the widget's next render fail with a
/// deliberate fault.
#[derive(Debug)]
pub struct FaultyWidget {
    should_fail: State<bool>,
}

impl FaultyWidget {
    #[must_use]
    pub fn new() -> Self {
        Self {
            should_fail: State::new(NAME, false),
        }
    }

    #[must_use]
    pub fn should_fail(&self) -> bool {
        self.should_fail.get()
    }

    /// Same transition as pressing the button. Returns whether the flag changed.
    pub fn trigger(&self) -> bool {
        self.should_fail.set(true)
    }
}

impl Default for FaultyWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FaultyWidget {
    fn name(&self) -> &'static str {
        NAME
    }

    fn mount(&mut self, signal: &UpdateSignal) {
        self.should_fail = State::new(NAME, false);
        self.should_fail.attach(signal);
    }

    fn render(&mut self, cx: &mut RenderContext) -> Result<Node, RenderError> {
        if self.should_fail.get() {
            return Err(RenderError::deliberate(FAULT_MESSAGE));
        }

        let should_fail = self.should_fail.clone();
        Ok(cx.button(BREAK_LABEL, move || {
            should_fail.set(true);
        }))
    }

    fn unmount(&mut self) {
        self.should_fail = State::new(NAME, false);
    }
}
