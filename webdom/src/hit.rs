//! Activation target resolution.
//!
//! A click lands on some element; the control it activates is the element
//! itself when it is a native control, otherwise the control associated with
//! the nearest enclosing `<label>`. Elements marked `pointer-events-none` are
//! transparent: a click on them lands on the control painted underneath.

use crate::element::{descendants, find_by_id, get, Element, NodeRef};
use crate::types::Tag;

/// Class that lets clicks fall through an element.
pub const POINTER_EVENTS_NONE: &str = "pointer-events-none";

/// Find the control activated by a click on `target`.
/// Returns None if the click does not reach any control.
pub fn activation_target(root: &Element, target: &NodeRef) -> Option<NodeRef> {
    let element = get(root, target)?;
    if element.is_control() {
        return Some(target.clone());
    }

    if let Some(overlay) = closest_where(root, target, |el| el.has_class(POINTER_EVENTS_NONE)) {
        return control_beneath(root, &overlay);
    }

    let label = closest(root, target, Tag::Label)?;
    labelled_control(root, &label)
}

/// The control under a click-through overlay: the nearest earlier sibling
/// that is a control, otherwise whatever a click on the parent reaches.
fn control_beneath(root: &Element, overlay: &NodeRef) -> Option<NodeRef> {
    let parent = overlay.parent()?;
    let position = *overlay.indices().last()?;
    for index in (0..position).rev() {
        let sibling = parent.child(index);
        if get(root, &sibling).is_some_and(Element::is_control) {
            return Some(sibling);
        }
    }
    activation_target(root, &parent)
}

/// The control a `<label>` is associated with: the element named by its
/// `for` attribute, or else the first control nested inside it.
pub fn labelled_control(root: &Element, label: &NodeRef) -> Option<NodeRef> {
    let element = get(root, label)?;
    if element.tag != Tag::Label {
        return None;
    }

    if let Some(for_id) = element.get_attr("for") {
        let control = find_by_id(root, for_id)?;
        return get(root, &control)
            .filter(|el| el.is_control())
            .map(|_| control);
    }

    descendants(element)
        .into_iter()
        .find(|(_, el)| el.is_control())
        .map(|(relative, _)| label.join(&relative))
}

/// Nearest element with the given tag, starting at `node` and walking up.
pub fn closest(root: &Element, node: &NodeRef, tag: Tag) -> Option<NodeRef> {
    closest_where(root, node, |el| el.tag == tag)
}

fn closest_where(
    root: &Element,
    node: &NodeRef,
    matches: impl Fn(&Element) -> bool,
) -> Option<NodeRef> {
    let mut current = Some(node.clone());
    while let Some(candidate) = current {
        if matches(get(root, &candidate)?) {
            return Some(candidate);
        }
        current = candidate.parent();
    }
    None
}
