//! The committed element tree and the native state of its controls.
//!
//! Elements describe what a render produced. Native state is what the live
//! control holds between renders: the checked value a user toggled and the
//! `indeterminate` property, which only exists on the live control and is
//! never expressed as an attribute.

use std::collections::BTreeMap;

use crate::element::{descendants, get, Element, NodeRef};
use crate::event::{ChangeEvent, Event, Key};
use crate::hit::activation_target;

/// Live properties of a native checkbox input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeInput {
    pub checked: bool,
    pub indeterminate: bool,
}

#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    natives: BTreeMap<NodeRef, NativeInput>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with an empty `<div>` root.
    pub fn new() -> Self {
        Self {
            root: Element::div(),
            natives: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, node: &NodeRef) -> Option<&Element> {
        get(&self.root, node)
    }

    /// Replace the tree with a freshly rendered one.
    ///
    /// Every control's native `checked` is reset to the rendered value.
    /// `indeterminate` carries over for controls that stay at the same
    /// position; controls new to a position start with it cleared.
    pub fn commit(&mut self, root: Element) {
        let mut natives = BTreeMap::new();
        for (node, element) in descendants(&root) {
            if !element.is_control() {
                continue;
            }
            let previous = self.natives.get(&node).copied().unwrap_or_default();
            natives.insert(
                node,
                NativeInput {
                    checked: element.checked,
                    indeterminate: previous.indeterminate,
                },
            );
        }

        log::debug!("[document] commit: {} control(s)", natives.len());
        self.natives = natives;
        self.root = root;
    }

    /// Remove a top-level child, shifting later siblings' native state
    /// down so it stays attached to the same controls.
    pub fn detach(&mut self, slot: usize) -> Option<Element> {
        let crate::element::Content::Children(children) = &mut self.root.content else {
            return None;
        };
        if slot >= children.len() {
            return None;
        }
        let removed = children.remove(slot);

        let natives = std::mem::take(&mut self.natives);
        self.natives = natives
            .into_iter()
            .filter_map(|(node, native)| Some((node.after_removal(slot)?, native)))
            .collect();

        Some(removed)
    }

    /// Native state of the control at `node`.
    pub fn native(&self, node: &NodeRef) -> Option<&NativeInput> {
        self.natives.get(node)
    }

    /// Mutable handle to the native state of the control at `node`.
    pub fn native_mut(&mut self, node: &NodeRef) -> Option<&mut NativeInput> {
        self.natives.get_mut(node)
    }

    /// Deliver an input event.
    ///
    /// Returns the resulting change when the event toggled a control.
    /// Disabled controls never change and never report a change.
    pub fn dispatch(&mut self, event: &Event) -> Option<ChangeEvent> {
        match event {
            Event::Click { target } => {
                let Some(control) = activation_target(&self.root, target) else {
                    log::trace!("[document] click on {target} reached no control");
                    return None;
                };
                self.activate(control)
            }
            // Space toggles a focused checkbox; Enter does not.
            Event::Key {
                target: Some(target),
                key: Key::Char(' '),
                modifiers,
            } if modifiers.none() => {
                if !self.get(target)?.is_control() {
                    return None;
                }
                self.activate(target.clone())
            }
            _ => None,
        }
    }

    fn activate(&mut self, control: NodeRef) -> Option<ChangeEvent> {
        let element = get(&self.root, &control)?;
        if element.disabled {
            log::debug!("[document] {control} is disabled, ignoring activation");
            return None;
        }

        let native = self.natives.entry(control.clone()).or_default();
        native.checked = !native.checked;
        Some(ChangeEvent {
            target: control,
            checked: native.checked,
        })
    }

    /// Serialize the committed tree.
    pub fn to_html(&self) -> String {
        crate::render::to_html(&self.root)
    }
}
