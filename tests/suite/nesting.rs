//! Which boundary catches what, once trees get deeper than the demo page.

use breaker_core::{
    ActionId, ContainmentBoundary, Fallback, FaultyWidget, Label, Root, RootError, Stack,
};

use crate::common::{BREAK_LABEL, frame, press};

#[test]
fn fault_outside_the_boundary_is_not_intercepted() {
    let page = Stack::new()
        .with(ContainmentBoundary::new(Label::new("guarded")))
        .with(FaultyWidget::new());
    let mut root = Root::mount(page).unwrap();

    press(&mut root, BREAK_LABEL);
    let err = root.flush().unwrap_err();

    let RootError::Uncaught(fault) = err;
    assert_eq!(fault.component_stack(), &["FaultyWidget", "Stack"]);
    assert!(root.is_failed());
    assert!(!root.activate(ActionId::new(0)));
}

#[test]
fn nearest_boundary_wins() {
    let inner = ContainmentBoundary::with_fallback(
        FaultyWidget::new(),
        Fallback::new("Inner", "inner fallback"),
    );
    let outer = ContainmentBoundary::with_fallback(
        Stack::new().with(Label::new("sibling")).with(inner),
        Fallback::new("Outer", "outer fallback"),
    );
    let mut root = Root::mount(outer).unwrap();

    press(&mut root, BREAK_LABEL);
    root.flush().unwrap();

    let page = frame(&root);
    assert_eq!(page.text_content(), "sibling Inner inner fallback");
    assert!(!page.contains_text("Outer"));
}

#[test]
fn boundary_replaces_its_whole_subtree() {
    let guarded = Stack::new()
        .with(Label::new("inside"))
        .with(FaultyWidget::new())
        .with(FaultyWidget::new());
    let page = Stack::new()
        .with(Label::new("header"))
        .with(ContainmentBoundary::new(guarded))
        .with(Label::new("footer"));
    let mut root = Root::mount(page).unwrap();
    assert_eq!(frame(&root).buttons().len(), 2);

    press(&mut root, BREAK_LABEL);
    root.flush().unwrap();

    let page = frame(&root);
    assert_eq!(
        page.text_content(),
        "header Uh oh! Something's gone wrong. Try refreshing the page. footer"
    );
    assert!(page.buttons().is_empty());
}

#[test]
fn sibling_boundaries_fail_independently() {
    let page = Stack::new()
        .with(ContainmentBoundary::with_fallback(
            FaultyWidget::new(),
            Fallback::new("Left", "down"),
        ))
        .with(ContainmentBoundary::with_fallback(
            FaultyWidget::new(),
            Fallback::new("Right", "down"),
        ));
    let mut root = Root::mount(page).unwrap();

    press(&mut root, BREAK_LABEL);
    root.flush().unwrap();

    let page = frame(&root);
    assert!(page.contains_text("Left down"));
    assert!(!page.contains_text("Right"));
    assert_eq!(page.buttons().len(), 1);

    // The surviving button was renumbered by the new pass.
    press(&mut root, BREAK_LABEL);
    root.flush().unwrap();
    assert_eq!(frame(&root).text_content(), "Left down Right down");
}
