//! Built-in components.

mod boundary;
mod faulty;
mod layout;

pub use boundary::{BoundaryState, ContainmentBoundary, Fallback};
pub use faulty::{BREAK_LABEL, FAULT_MESSAGE, FaultyWidget};
pub use layout::{Label, Stack};
