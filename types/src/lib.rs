//! Core UI types for Breaker.
//!
//! This crate contains the output of a render pass (the [`Node`] tree) and the
//! error a render pass can raise. No IO, no terminal, no component logic.

mod error;
mod ids;
mod node;

pub use error::{FaultKind, RenderError};
pub use ids::ActionId;
pub use node::Node;
