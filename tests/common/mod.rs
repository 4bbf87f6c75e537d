//! Shared test utilities.

#![allow(dead_code)]

use breaker_core::{Node, Root};

pub const BREAK_LABEL: &str = "Break it";
pub const FALLBACK_TEXT: &str = "Uh oh! Something's gone wrong. Try refreshing the page.";

/// The current frame of a root that is expected to be healthy.
pub fn frame(root: &Root) -> &Node {
    root.frame().expect("page should still be rendered")
}

/// Press the first button labelled `label` in the current frame.
pub fn press(root: &mut Root, label: &str) {
    let action = frame(root)
        .find_button(label)
        .unwrap_or_else(|| panic!("no {label:?} button in:\n{}", frame(root)));
    assert!(root.activate(action), "handler for {label:?} did not run");
}
