//! Host: mounts widgets into a document and runs interaction turns.
//!
//! Every widget occupies one top-level slot of the document root. An
//! interaction turn is:
//!
//! 1. the document resolves the event to a native toggle (or nothing)
//! 2. the owning widget handles the new value and calls its handler
//! 3. every widget re-renders and the document commits the new tree
//! 4. post-commit hooks run against the native controls
//!
//! All of it completes before `dispatch` returns.

use std::fmt;
use std::marker::PhantomData;

use crossterm::event::Event as CrosstermEvent;
use log::{debug, warn};
use thiserror::Error;
use webdom::{Document, Element, Event, FocusState, Key, Modifiers, NodeRef};

use crate::id::InstanceId;
use crate::widget::{AnyWidget, Props, Widget, WidgetResult};

/// Errors from host operations addressed by a handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The handle's widget was unmounted.
    #[error("no mounted widget with id {0}")]
    UnknownInstance(InstanceId),
}

/// Typed reference to a mounted widget.
pub struct Handle<W> {
    id: InstanceId,
    _marker: PhantomData<fn() -> W>,
}

impl<W> Handle<W> {
    fn new(id: InstanceId) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }
}

impl<W> Clone for Handle<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for Handle<W> {}

impl<W> fmt::Debug for Handle<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&self.id).finish()
    }
}

struct Mounted {
    id: InstanceId,
    widget: Box<dyn AnyWidget>,
}

#[derive(Default)]
pub struct Host {
    document: Document,
    widgets: Vec<Mounted>,
    focus: FocusState,
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host")
            .field("widget_count", &self.widgets.len())
            .field("focused", &self.focus.focused())
            .finish()
    }
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Mount a widget after the existing ones and render it.
    pub fn mount<P: Props>(&mut self, props: P) -> Handle<P::Widget> {
        let id = InstanceId::new();
        let widget = <P::Widget as Widget>::mount(props);
        debug!("[host] mounted {} as {id}", <P::Widget as Widget>::NAME);
        self.widgets.push(Mounted {
            id,
            widget: Box::new(widget),
        });
        self.commit();
        Handle::new(id)
    }

    /// Render a mounted widget with new props.
    ///
    /// Never reports a change: only user interaction does.
    pub fn rerender<W: Widget>(
        &mut self,
        handle: &Handle<W>,
        props: W::Props,
    ) -> Result<(), HostError> {
        self.widget_mut(handle)?.update(props);
        self.commit();
        Ok(())
    }

    /// Remove a widget and its markup.
    pub fn unmount<W: Widget>(&mut self, handle: Handle<W>) -> Result<(), HostError> {
        let slot = self.slot_of(handle.id)?;
        let removed = self.widgets.remove(slot);
        self.document.detach(slot);
        self.focus.detach(slot);
        debug!("[host] unmounted {} {}", removed.widget.name(), handle.id);
        self.commit();
        Ok(())
    }

    pub fn widget<W: Widget>(&self, handle: &Handle<W>) -> Result<&W, HostError> {
        let slot = self.slot_of(handle.id)?;
        // Handles are typed at mount, so the slot always holds a `W`.
        self.widgets[slot]
            .widget
            .as_any()
            .downcast_ref::<W>()
            .ok_or(HostError::UnknownInstance(handle.id))
    }

    fn widget_mut<W: Widget>(&mut self, handle: &Handle<W>) -> Result<&mut W, HostError> {
        let slot = self.slot_of(handle.id)?;
        self.widgets[slot]
            .widget
            .as_any_mut()
            .downcast_mut::<W>()
            .ok_or(HostError::UnknownInstance(handle.id))
    }

    /// The value the widget currently displays.
    pub fn is_checked<W: Widget>(&self, handle: &Handle<W>) -> Result<bool, HostError> {
        Ok(Widget::is_checked(self.widget(handle)?))
    }

    /// Reference to the widget's root element in the document.
    pub fn root_of<W: Widget>(&self, handle: &Handle<W>) -> Result<NodeRef, HostError> {
        Ok(NodeRef::root().child(self.slot_of(handle.id)?))
    }

    /// Reference to the widget's native control in the document.
    pub fn control<W: Widget>(&self, handle: &Handle<W>) -> Result<NodeRef, HostError> {
        let root = self.root_of(handle)?;
        Ok(root.join(&Widget::control(self.widget(handle)?)))
    }

    /// The widget's current markup.
    pub fn element<W: Widget>(&self, handle: &Handle<W>) -> Result<&Element, HostError> {
        let root = self.root_of(handle)?;
        self.document
            .get(&root)
            .ok_or(HostError::UnknownInstance(handle.id))
    }

    fn slot_of(&self, id: InstanceId) -> Result<usize, HostError> {
        self.widgets
            .iter()
            .position(|m| m.id == id)
            .ok_or(HostError::UnknownInstance(id))
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Click an element of the document.
    pub fn click(&mut self, target: &NodeRef) -> WidgetResult {
        let event = Event::Click {
            target: target.clone(),
        };
        self.dispatch(&event)
    }

    /// Press a key on the focused element.
    pub fn press(&mut self, key: Key, modifiers: Modifiers) -> WidgetResult {
        let event = Event::Key {
            target: self.focus.focused().cloned(),
            key,
            modifiers,
        };
        self.dispatch(&event)
    }

    pub fn focus_next(&mut self) -> Option<NodeRef> {
        self.focus.focus_next(self.document.root())
    }

    pub fn focus_prev(&mut self) -> Option<NodeRef> {
        self.focus.focus_prev(self.document.root())
    }

    /// Focus a widget's native control.
    pub fn focus_widget<W: Widget>(&mut self, handle: &Handle<W>) -> Result<bool, HostError> {
        let control = self.control(handle)?;
        Ok(self.focus.focus(&control))
    }

    /// Route raw terminal events through focus handling and dispatch.
    pub fn handle_terminal_events(&mut self, raw: &[CrosstermEvent]) -> Vec<WidgetResult> {
        let events = self.focus.process_events(raw, self.document.root());
        events.iter().map(|event| self.dispatch(event)).collect()
    }

    /// Run one interaction turn for `event`.
    pub fn dispatch(&mut self, event: &Event) -> WidgetResult {
        match event {
            Event::Focus { target } => {
                self.focus.focus(target);
                return WidgetResult::Ignored;
            }
            Event::Blur { target } => {
                if self.focus.focused() == Some(target) {
                    self.focus.blur();
                }
                return WidgetResult::Ignored;
            }
            _ => {}
        }

        let Some(change) = self.document.dispatch(event) else {
            return WidgetResult::Ignored;
        };

        let owner = change.target.slot().and_then(|slot| {
            let mounted = self.widgets.get(slot)?;
            let control = NodeRef::root().child(slot).join(&mounted.widget.control());
            (control == change.target).then_some(mounted)
        });
        let Some(mounted) = owner else {
            warn!("[host] change on {} has no owning widget", change.target);
            return WidgetResult::Ignored;
        };

        let result = mounted.widget.handle_change(change.checked);
        self.commit();
        result
    }

    /// Render every widget, commit, then run post-commit hooks.
    fn commit(&mut self) {
        let root = Element::div().children(self.widgets.iter().map(|m| m.widget.element()));
        self.document.commit(root);

        for (slot, mounted) in self.widgets.iter_mut().enumerate() {
            let control = NodeRef::root().child(slot).join(&mounted.widget.control());
            if let Some(native) = self.document.native_mut(&control) {
                mounted.widget.after_commit(native);
            }
        }

        self.focus.validate(self.document.root());
    }
}
