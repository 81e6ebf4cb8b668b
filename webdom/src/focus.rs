use crossterm::event::{Event as CrosstermEvent, KeyEventKind};

use crate::element::{descendants, get, Element, NodeRef};
use crate::event::{Event, Key, Modifiers};

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<NodeRef>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element.
    pub fn focused(&self) -> Option<&NodeRef> {
        self.focused.as_ref()
    }

    /// Programmatically focus an element.
    /// Returns true if focus changed.
    pub fn focus(&mut self, node: &NodeRef) -> bool {
        if self.focused.as_ref() == Some(node) {
            return false;
        }
        self.focused = Some(node.clone());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Follow the focused element when top-level child `slot` is removed.
    /// Focus inside the removed child is dropped.
    pub fn detach(&mut self, slot: usize) {
        let Some(focused) = self.focused.take() else {
            return;
        };
        self.focused = focused.after_removal(slot);
        if self.focused.is_none() {
            log::debug!("[focus] focused element {focused} was removed");
        }
    }

    /// Drop focus if the focused element is gone or can no longer take focus.
    pub fn validate(&mut self, root: &Element) {
        let still_focusable = self
            .focused
            .as_ref()
            .and_then(|node| get(root, node))
            .is_some_and(is_focusable);
        if !still_focusable && self.focused.take().is_some() {
            log::debug!("[focus] focused element left the tree");
        }
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<NodeRef> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => {
                let idx = focusable.iter().position(|node| node == current);
                match idx {
                    Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                    None => focusable[0].clone(),
                }
            }
        };

        self.move_to(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<NodeRef> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let last = focusable.len() - 1;
        let new_focus = match &self.focused {
            None => focusable[last].clone(),
            Some(current) => {
                let idx = focusable.iter().position(|node| node == current);
                match idx {
                    Some(0) | None => focusable[last].clone(),
                    Some(i) => focusable[i - 1].clone(),
                }
            }
        };

        self.move_to(new_focus)
    }

    fn move_to(&mut self, new_focus: NodeRef) -> Option<NodeRef> {
        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Process raw crossterm events and produce high-level events.
    ///
    /// Tab and BackTab move focus; every other key press is targeted at the
    /// focused element. Mouse input is not mapped since the tree has no
    /// geometry.
    pub fn process_events(&mut self, raw: &[CrosstermEvent], root: &Element) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            let CrosstermEvent::Key(key_event) = raw_event else {
                continue;
            };
            // Only process key press events (not release/repeat on some terminals)
            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            let key: Key = key_event.code.into();
            let modifiers: Modifiers = key_event.modifiers.into();

            match key {
                Key::Tab | Key::BackTab => {
                    let old = self.focused.clone();
                    let new = if key == Key::Tab {
                        self.focus_next(root)
                    } else {
                        self.focus_prev(root)
                    };
                    if let Some(new) = new {
                        if let Some(old) = old {
                            events.push(Event::Blur { target: old });
                        }
                        events.push(Event::Focus { target: new });
                    }
                }
                _ => events.push(Event::Key {
                    target: self.focused.clone(),
                    key,
                    modifiers,
                }),
            }
        }

        events
    }
}

fn is_focusable(element: &Element) -> bool {
    element.is_control() && !element.disabled
}

/// Collect all focusable elements in document order.
/// Disabled controls are skipped.
pub fn collect_focusable(root: &Element) -> Vec<NodeRef> {
    descendants(root)
        .into_iter()
        .filter(|(_, el)| is_focusable(el))
        .map(|(node, _)| node)
        .collect()
}
