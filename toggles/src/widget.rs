//! Widget traits.
//!
//! A widget is the mounted form of a props value:
//! - `Props` is what the owner configures and passes on every render
//! - the widget keeps whatever must survive between renders (internal
//!   value, generated id, last synchronised native property)
//! - `element()` produces a webdom Element for the current props and state
//! - `handle_change()` reacts to a native toggle and returns a WidgetResult
//!
//! The host drives all of this; widgets never touch the document directly
//! except through the native input handle passed to `after_commit()`.

use std::any::Any;

use webdom::{Element, NativeInput, NodeRef};

/// Result of a widget handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetResult {
    /// Event was not handled by any widget.
    #[default]
    Ignored,
    /// Widget value changed (checkbox or switch toggle).
    Changed,
}

impl WidgetResult {
    /// Check if the event was handled (not Ignored).
    pub fn is_handled(&self) -> bool {
        !matches!(self, WidgetResult::Ignored)
    }
}

/// Configuration that can be mounted as a widget.
pub trait Props: Clone + Send + Sync + 'static {
    type Widget: Widget<Props = Self>;
}

/// A mounted widget instance.
///
/// # Lifecycle
///
/// 1. `mount()` creates the instance from its first props
/// 2. `element()` is called on every render
/// 3. `after_commit()` runs once the render is in the document
/// 4. `update()` replaces props on a re-render by the owner
/// 5. `handle_change()` runs when the user toggles the native control
pub trait Widget: Send + Sync + 'static {
    type Props: Clone + Send + Sync + 'static;

    /// Display name used in logs.
    const NAME: &'static str;

    fn mount(props: Self::Props) -> Self;

    fn props(&self) -> &Self::Props;

    /// Replace props. Never produces a change notification.
    fn update(&mut self, props: Self::Props);

    /// Build the element tree for the current props and state.
    fn element(&self) -> Element;

    /// Position of the native control relative to the widget's root element.
    fn control(&self) -> NodeRef;

    /// The value currently displayed.
    fn is_checked(&self) -> bool;

    /// Handle a user toggle of the native control.
    fn handle_change(&self, checked: bool) -> WidgetResult;

    /// Post-commit hook with a mutable handle to the native control.
    fn after_commit(&mut self, native: &mut NativeInput) {
        let _ = native;
    }
}

/// Object-safe view of a [`Widget`], used for storage in the host.
pub trait AnyWidget: Send + Sync {
    fn name(&self) -> &'static str;
    fn element(&self) -> Element;
    fn control(&self) -> NodeRef;
    fn handle_change(&self, checked: bool) -> WidgetResult;
    fn after_commit(&mut self, native: &mut NativeInput);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<W: Widget> AnyWidget for W {
    fn name(&self) -> &'static str {
        W::NAME
    }

    fn element(&self) -> Element {
        Widget::element(self)
    }

    fn control(&self) -> NodeRef {
        Widget::control(self)
    }

    fn handle_change(&self, checked: bool) -> WidgetResult {
        Widget::handle_change(self, checked)
    }

    fn after_commit(&mut self, native: &mut NativeInput) {
        Widget::after_commit(self, native)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
