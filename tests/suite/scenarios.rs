//! End-to-end behavior of the demo page: a faulty widget inside a boundary.

use breaker_core::{Component, FaultKind, Fallback, RenderContext, Root, UpdateSignal, demo_tree};

use crate::common::{BREAK_LABEL, FALLBACK_TEXT, frame, press};

#[test]
fn break_it_swaps_the_control_for_the_fallback() {
    let mut root = Root::mount(demo_tree(Fallback::default())).unwrap();

    let initial = frame(&root);
    assert!(initial.find_button(BREAK_LABEL).is_some());
    assert!(!initial.contains_text("Uh oh!"));

    press(&mut root, BREAK_LABEL);
    assert!(root.flush().unwrap());

    let after = frame(&root);
    assert_eq!(after.text_content(), FALLBACK_TEXT);
    assert!(after.find_button(BREAK_LABEL).is_none());
}

#[test]
fn idle_page_never_rerenders_or_faults() {
    let mut root = Root::mount(demo_tree(Fallback::default())).unwrap();
    for _ in 0..10 {
        assert!(!root.flush().unwrap());
        root.render().unwrap();
        assert!(frame(&root).find_button(BREAK_LABEL).is_some());
    }
    assert_eq!(root.signal().notifications(), 0);
}

#[test]
fn one_press_means_one_notification_and_one_fault() {
    let mut root = Root::mount(demo_tree(Fallback::default())).unwrap();
    let action = frame(&root).find_button(BREAK_LABEL).unwrap();

    assert!(root.activate(action));
    // Same pass, same handler: the flag is already set.
    assert!(root.activate(action));
    assert_eq!(root.signal().notifications(), 1);

    root.flush().unwrap();
    assert_eq!(root.passes(), 2);
}

#[test]
fn fallback_is_permanent_for_the_mounted_instance() {
    let mut root = Root::mount(demo_tree(Fallback::default())).unwrap();
    let action = frame(&root).find_button(BREAK_LABEL).unwrap();
    press(&mut root, BREAK_LABEL);
    root.flush().unwrap();

    // The old handler belongs to a pass that no longer exists.
    assert!(!root.activate(action));

    for _ in 0..5 {
        root.signal().notify("External");
        assert!(root.flush().unwrap());
        assert_eq!(frame(&root).text_content(), FALLBACK_TEXT);
    }
}

#[test]
fn remounting_is_the_only_way_back() {
    let mut root = Root::mount(demo_tree(Fallback::default())).unwrap();
    press(&mut root, BREAK_LABEL);
    root.flush().unwrap();
    root.unmount();

    let fresh = Root::mount(demo_tree(Fallback::default())).unwrap();
    assert!(frame(&fresh).find_button(BREAK_LABEL).is_some());
}

#[test]
fn contained_fault_is_deliberate() {
    let mut boundary = demo_tree(Fallback::default());
    boundary.mount(&UpdateSignal::new());
    boundary.child().trigger();

    let mut cx = RenderContext::new();
    cx.render_child(&mut boundary).unwrap();

    let err = boundary.last_error().unwrap();
    assert_eq!(err.kind(), FaultKind::DeliberateFault);
    assert_eq!(err.message(), "Whoopsie!");
    assert_eq!(
        err.component_trace(),
        "    in FaultyWidget\n    in ContainmentBoundary"
    );
}
