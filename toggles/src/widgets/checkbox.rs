//! Checkbox widget - a tri-state toggle with optional label.

use std::fmt;
use std::sync::Arc;

use log::{debug, trace, warn};
use webdom::{Element, NativeInput, NodeRef};

use crate::controller::{ChangeHandler, ControlMode, ToggleState};
use crate::id::generate_id;
use crate::size::Size;
use crate::widget::{Props, Widget, WidgetResult};

const CONTROL_CLASSES: &str = "appearance-none border border-gray-300 rounded bg-white \
     transition-colors duration-200 cursor-pointer \
     focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2";
const FILLED_CLASSES: &str = "bg-blue-600 border-blue-600";
const DISABLED_CLASSES: &str = "opacity-50 cursor-not-allowed";
const GLYPH_WRAPPER_CLASSES: &str =
    "absolute pointer-events-none text-white flex items-center justify-center";

/// Path data of the checkmark glyph.
pub const CHECK_PATH: &str = "M4 8.5L6.5 11L12 5";
/// Path data of the indeterminate dash glyph.
pub const DASH_PATH: &str = "M4 8L12 8";

/// Checkbox configuration.
///
/// Every field is optional. Supplying [`checked`](Self::checked) makes the
/// checkbox controlled: it shows exactly that value until the owner renders
/// it with a different one.
///
/// # Example
///
/// ```
/// use toggles::{Checkbox, Host, Size};
///
/// let mut host = Host::new();
/// let terms = host.mount(Checkbox::new().label("Accept terms").size(Size::Lg));
/// let control = host.control(&terms).unwrap();
///
/// host.click(&control);
/// assert!(host.is_checked(&terms).unwrap());
/// ```
#[derive(Clone, Default)]
pub struct Checkbox {
    checked: Option<bool>,
    default_checked: bool,
    disabled: bool,
    on_change: Option<ChangeHandler>,
    size: Size,
    label: Option<String>,
    class_name: String,
    id: Option<String>,
    name: Option<String>,
    value: Option<String>,
    required: bool,
    indeterminate: bool,
}

impl fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkbox")
            .field("checked", &self.checked)
            .field("default_checked", &self.default_checked)
            .field("disabled", &self.disabled)
            .field("on_change", &self.on_change.is_some())
            .field("size", &self.size)
            .field("label", &self.label)
            .field("class_name", &self.class_name)
            .field("id", &self.id)
            .field("name", &self.name)
            .field("value", &self.value)
            .field("required", &self.required)
            .field("indeterminate", &self.indeterminate)
            .finish()
    }
}

impl Checkbox {
    /// Create a new checkbox configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Control the checkbox with an owner-supplied value.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Set or clear the owner-supplied value.
    pub fn checked_opt(mut self, checked: Option<bool>) -> Self {
        self.checked = checked;
        self
    }

    /// Initial value when uncontrolled. Only read at mount.
    pub fn default_checked(mut self, default_checked: bool) -> Self {
        self.default_checked = default_checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the change callback.
    pub fn on_change(mut self, f: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }

    /// Set an already shared change callback.
    pub fn on_change_handler(mut self, handler: ChangeHandler) -> Self {
        self.on_change = Some(handler);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the label text shown next to the box.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Extra classes for the outer wrapper.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the input id. Without one, the mounted checkbox generates its own.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Show the partially-selected overlay. Does not affect the value.
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    pub fn checked_value(&self) -> Option<bool> {
        self.checked
    }

    pub fn is_indeterminate(&self) -> bool {
        self.indeterminate
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl Props for Checkbox {
    type Widget = CheckboxWidget;
}

/// A mounted checkbox.
#[derive(Debug)]
pub struct CheckboxWidget {
    props: Checkbox,
    toggle: ToggleState,
    /// Fallback id, created once at mount.
    generated_id: String,
    /// Last value written to the native `indeterminate` property.
    synced_indeterminate: Option<bool>,
}

impl CheckboxWidget {
    /// The input's id: the supplied one, or the one generated at mount.
    pub fn element_id(&self) -> &str {
        self.props.id.as_deref().unwrap_or(&self.generated_id)
    }

    pub fn mode(&self) -> ControlMode {
        ToggleState::mode(self.props.checked)
    }

    pub fn toggle_state(&self) -> &ToggleState {
        &self.toggle
    }

    /// The `indeterminate` value last written to the native control, if any.
    pub fn synced_indeterminate(&self) -> Option<bool> {
        self.synced_indeterminate
    }

    fn glyph(&self, path: &str) -> Element {
        Element::div().class(GLYPH_WRAPPER_CLASSES).child(
            Element::svg()
                .class(self.props.size.checkbox().glyph)
                .attr("viewBox", "0 0 16 16")
                .attr("fill", "none")
                .attr("stroke", "currentColor")
                .attr("stroke-width", "3")
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round")
                .child(Element::path(path)),
        )
    }
}

/// Value of `aria-checked`: `mixed` overrides the boolean while indeterminate.
pub fn aria_checked(checked: bool, indeterminate: bool) -> &'static str {
    match (indeterminate, checked) {
        (true, _) => "mixed",
        (false, true) => "true",
        (false, false) => "false",
    }
}

impl Widget for CheckboxWidget {
    type Props = Checkbox;

    const NAME: &'static str = "checkbox";

    fn mount(props: Checkbox) -> Self {
        let toggle = ToggleState::new(props.default_checked);
        let generated_id = generate_id("checkbox");
        debug!(
            "[checkbox] mount {} ({})",
            props.id.as_deref().unwrap_or(&generated_id),
            ToggleState::mode(props.checked)
        );
        Self {
            props,
            toggle,
            generated_id,
            synced_indeterminate: None,
        }
    }

    fn props(&self) -> &Checkbox {
        &self.props
    }

    fn update(&mut self, props: Checkbox) {
        let (before, after) = (self.mode(), ToggleState::mode(props.checked));
        if before != after {
            warn!(
                "[checkbox] {} switched from {before} to {after}; keep one mode for the widget's lifetime",
                self.element_id()
            );
        }
        self.props = props;
    }

    fn element(&self) -> Element {
        let checked = self.is_checked();
        let indeterminate = self.props.indeterminate;
        let disabled = self.props.disabled;
        let preset = self.props.size.checkbox();
        let id = self.element_id();

        let input = Element::checkbox_input()
            .id(id)
            .attr_opt("name", self.props.name.as_deref())
            .attr_opt("value", self.props.value.as_deref())
            .attr("aria-checked", aria_checked(checked, indeterminate))
            .checked(checked)
            .disabled(disabled)
            .required(self.props.required)
            .class(preset.control)
            .class(CONTROL_CLASSES)
            .class_if(checked || indeterminate, FILLED_CLASSES)
            .class_if(disabled, DISABLED_CLASSES);

        // The dash wins over the checkmark; neither changes the value.
        let glyph = if indeterminate {
            Some(self.glyph(DASH_PATH))
        } else if checked {
            Some(self.glyph(CHECK_PATH))
        } else {
            None
        };

        let indicator = Element::div()
            .class("relative flex items-center")
            .child(input)
            .child_opt(glyph);

        let label = self.props.label.as_ref().map(|text| {
            Element::label()
                .attr("for", id)
                .class("ml-2")
                .class(preset.label)
                .class(if disabled {
                    DISABLED_CLASSES
                } else {
                    "cursor-pointer"
                })
                .inner_text(text)
        });

        Element::div()
            .class("flex items-center")
            .class(&self.props.class_name)
            .child(indicator)
            .child_opt(label)
    }

    fn control(&self) -> NodeRef {
        NodeRef::from_indices([0, 0])
    }

    fn is_checked(&self) -> bool {
        self.toggle.displayed(self.props.checked)
    }

    fn handle_change(&self, checked: bool) -> WidgetResult {
        debug!(
            "[checkbox] {} toggled to {checked} ({})",
            self.element_id(),
            self.mode()
        );
        self.toggle
            .handle_change(self.props.checked, checked, self.props.on_change.as_ref());
        WidgetResult::Changed
    }

    fn after_commit(&mut self, native: &mut NativeInput) {
        let wanted = self.props.indeterminate;
        if self.synced_indeterminate == Some(wanted) {
            return;
        }
        trace!(
            "[checkbox] {} indeterminate -> {wanted}",
            self.element_id()
        );
        native.indeterminate = wanted;
        self.synced_indeterminate = Some(wanted);
    }
}
