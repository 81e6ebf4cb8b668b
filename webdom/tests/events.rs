use webdom::{
    activation_target, collect_focusable, ChangeEvent, Document, Element, Event, FocusState, Key,
    Modifiers, NodeRef,
};

/// A checkbox with a sibling `<label for>`, and a switch-style label
/// wrapping its input.
fn form() -> Element {
    Element::div()
        .child(
            Element::div()
                .child(Element::checkbox_input().id("terms"))
                .child(Element::label().attr("for", "terms").child(Element::text("Terms"))),
        )
        .child(
            Element::label()
                .child(Element::checkbox_input())
                .child(Element::div().child(Element::div())),
        )
        .child(Element::checkbox_input().id("locked").disabled(true))
}

fn committed(root: Element) -> Document {
    let mut doc = Document::new();
    doc.commit(root);
    doc
}

fn click(node: &[usize]) -> Event {
    Event::Click {
        target: NodeRef::from_indices(node.iter().copied()),
    }
}

// ============================================================================
// Activation Targets
// ============================================================================

#[test]
fn test_activation_target_control_itself() {
    let root = form();
    let input = NodeRef::from_indices([0, 0]);
    assert_eq!(activation_target(&root, &input), Some(input));
}

#[test]
fn test_activation_target_label_for() {
    let root = form();
    // Click on the label's text span
    let text = NodeRef::from_indices([0, 1, 0]);
    assert_eq!(
        activation_target(&root, &text),
        Some(NodeRef::from_indices([0, 0]))
    );
}

#[test]
fn test_activation_target_wrapping_label() {
    let root = form();
    // Click on the inner "thumb" div of the wrapping label
    let thumb = NodeRef::from_indices([1, 1, 0]);
    assert_eq!(
        activation_target(&root, &thumb),
        Some(NodeRef::from_indices([1, 0]))
    );
}

#[test]
fn test_activation_target_outside_labels() {
    let root = form();
    assert_eq!(activation_target(&root, &NodeRef::from_indices([0])), None);
    assert_eq!(activation_target(&root, &NodeRef::from_indices([9, 9])), None);
}

#[test]
fn test_activation_target_through_click_through_overlay() {
    // input + overlay glyph stacked in the same box, like a custom checkbox
    let root = Element::div().child(
        Element::div()
            .child(Element::checkbox_input())
            .child(
                Element::div()
                    .class("absolute pointer-events-none")
                    .child(Element::svg().child(Element::path("M0 0"))),
            ),
    );
    let control = NodeRef::from_indices([0, 0]);
    assert_eq!(
        activation_target(&root, &NodeRef::from_indices([0, 1, 0, 0])),
        Some(control.clone())
    );
    assert_eq!(
        activation_target(&root, &NodeRef::from_indices([0, 1])),
        Some(control)
    );
    // The box itself is not click-through.
    assert_eq!(activation_target(&root, &NodeRef::from_indices([0])), None);
}

#[test]
fn test_overlay_without_control_falls_back_to_label() {
    let root = Element::div().child(
        Element::label()
            .child(Element::div().class("pointer-events-none"))
            .child(Element::checkbox_input()),
    );
    assert_eq!(
        activation_target(&root, &NodeRef::from_indices([0, 0])),
        Some(NodeRef::from_indices([0, 1]))
    );
}

#[test]
fn test_label_for_missing_id_reaches_nothing() {
    let root = Element::div().child(Element::label().attr("for", "nope"));
    assert_eq!(activation_target(&root, &NodeRef::from_indices([0])), None);
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_click_toggles_native_checked() {
    let mut doc = committed(form());

    let change = doc.dispatch(&click(&[0, 0]));
    assert_eq!(
        change,
        Some(ChangeEvent {
            target: NodeRef::from_indices([0, 0]),
            checked: true,
        })
    );
    assert!(doc.native(&NodeRef::from_indices([0, 0])).unwrap().checked);

    let change = doc.dispatch(&click(&[0, 1])).unwrap();
    assert!(!change.checked);
}

#[test]
fn test_click_disabled_reports_nothing() {
    let mut doc = committed(form());
    let locked = NodeRef::from_indices([2]);

    assert_eq!(doc.dispatch(&click(&[2])), None);
    assert!(!doc.native(&locked).unwrap().checked);
}

#[test]
fn test_space_on_focused_control() {
    let mut doc = committed(form());
    let input = NodeRef::from_indices([1, 0]);

    let space = Event::Key {
        target: Some(input.clone()),
        key: Key::Char(' '),
        modifiers: Modifiers::new(),
    };
    assert_eq!(doc.dispatch(&space).map(|c| c.checked), Some(true));

    let enter = Event::Key {
        target: Some(input.clone()),
        key: Key::Enter,
        modifiers: Modifiers::new(),
    };
    assert_eq!(doc.dispatch(&enter), None);

    let ctrl_space = Event::Key {
        target: Some(input),
        key: Key::Char(' '),
        modifiers: Modifiers::ctrl(),
    };
    assert_eq!(doc.dispatch(&ctrl_space), None);
}

#[test]
fn test_commit_resets_checked_and_keeps_indeterminate() {
    let mut doc = committed(form());
    let input = NodeRef::from_indices([0, 0]);

    doc.native_mut(&input).unwrap().indeterminate = true;
    doc.dispatch(&click(&[0, 0]));
    assert!(doc.native(&input).unwrap().checked);

    // Re-render still says unchecked: the native value follows the render.
    doc.commit(form());
    let native = doc.native(&input).unwrap();
    assert!(!native.checked);
    assert!(native.indeterminate);
}

#[test]
fn test_detach_shifts_native_state() {
    let root = Element::div()
        .child(Element::div().child(Element::checkbox_input()))
        .child(Element::div().child(Element::checkbox_input()));
    let mut doc = committed(root);
    doc.native_mut(&NodeRef::from_indices([1, 0])).unwrap().indeterminate = true;

    assert!(doc.detach(0).is_some());
    let shifted = doc.native(&NodeRef::from_indices([0, 0])).unwrap();
    assert!(shifted.indeterminate);
    assert!(doc.native(&NodeRef::from_indices([1, 0])).is_none());
    assert!(doc.detach(5).is_none());
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_collect_focusable_skips_disabled() {
    let root = form();
    assert_eq!(
        collect_focusable(&root),
        vec![NodeRef::from_indices([0, 0]), NodeRef::from_indices([1, 0])]
    );
}

#[test]
fn test_focus_next_and_prev_wrap() {
    let root = form();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), Some(NodeRef::from_indices([0, 0])));
    assert_eq!(focus.focus_next(&root), Some(NodeRef::from_indices([1, 0])));
    assert_eq!(focus.focus_next(&root), Some(NodeRef::from_indices([0, 0])));
    assert_eq!(focus.focus_prev(&root), Some(NodeRef::from_indices([1, 0])));
}

#[test]
fn test_focus_validate_drops_missing() {
    let mut focus = FocusState::new();
    focus.focus(&NodeRef::from_indices([2]));

    // Disabled controls cannot hold focus
    focus.validate(&form());
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_focus_detach_follows_shifted_slots() {
    let mut focus = FocusState::new();
    focus.focus(&NodeRef::from_indices([2, 0, 0]));

    focus.detach(3);
    assert_eq!(focus.focused(), Some(&NodeRef::from_indices([2, 0, 0])));

    focus.detach(0);
    assert_eq!(focus.focused(), Some(&NodeRef::from_indices([1, 0, 0])));

    focus.detach(1);
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_node_after_removal() {
    let node = NodeRef::from_indices([1, 4]);
    assert_eq!(node.after_removal(0), Some(NodeRef::from_indices([0, 4])));
    assert_eq!(node.after_removal(1), None);
    assert_eq!(node.after_removal(2), Some(node.clone()));
    assert_eq!(NodeRef::root().after_removal(0), Some(NodeRef::root()));
}

#[test]
fn test_unsupported_keys_convert_to_other() {
    use crossterm::event::KeyCode;

    assert_eq!(Key::from(KeyCode::Char(' ')), Key::Char(' '));
    assert_eq!(Key::from(KeyCode::BackTab), Key::BackTab);
    assert_eq!(Key::from(KeyCode::F(1)), Key::Other);
    assert_eq!(Key::from(KeyCode::Esc), Key::Other);
    assert_eq!(Key::from(KeyCode::Null), Key::Other);
}
