//! Queries over an element tree, in the spirit of DOM testing helpers.

use crate::element::{descendants, Content, Element, NodeRef};
use crate::hit::labelled_control;
use crate::types::Role;

/// All elements with the given role, in document order.
pub fn by_role(root: &Element, role: Role) -> Vec<NodeRef> {
    descendants(root)
        .into_iter()
        .filter(|(_, el)| el.role() == role)
        .map(|(node, _)| node)
        .collect()
}

/// The control whose accessible name is `text`.
///
/// Matches `<label>` text (through `for` or nesting) and `aria-label`.
pub fn by_label_text(root: &Element, text: &str) -> Option<NodeRef> {
    for (node, el) in descendants(root) {
        if el.is_control() && el.get_attr("aria-label") == Some(text) {
            return Some(node);
        }
        if el.role() == Role::Label && el.text_content().trim() == text {
            if let Some(control) = labelled_control(root, &node) {
                return Some(control);
            }
        }
    }
    None
}

/// The first element whose own text content is exactly `text`.
pub fn by_text(root: &Element, text: &str) -> Option<NodeRef> {
    descendants(root)
        .into_iter()
        .find(|(_, el)| matches!(&el.content, Content::Text(t) if t == text))
        .map(|(node, _)| node)
}
