//! Errors raised during a render pass.

use std::fmt;

use thiserror::Error;

/// Taxonomy of render faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Raised on purpose by a component to exercise containment.
    DeliberateFault,
}

impl FaultKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeliberateFault => "DeliberateFault",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fault raised synchronously while rendering a component.
///
/// As the error travels up through parent render calls each frame records the
/// component it left, so `component_stack` reads innermost first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct RenderError {
    kind: FaultKind,
    message: String,
    component_stack: Vec<&'static str>,
}

impl RenderError {
    #[must_use]
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            component_stack: Vec::new(),
        }
    }

    #[must_use]
    pub fn deliberate(message: impl Into<String>) -> Self {
        Self::new(FaultKind::DeliberateFault, message)
    }

    #[must_use]
    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn component_stack(&self) -> &[&'static str] {
        &self.component_stack
    }

    /// Record that the error propagated out of `component`.
    pub fn unwound_through(&mut self, component: &'static str) {
        self.component_stack.push(component);
    }

    /// Multi-line trace of where the error was raised, innermost first.
    #[must_use]
    pub fn component_trace(&self) -> String {
        self.component_stack
            .iter()
            .map(|name| format!("    in {name}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
