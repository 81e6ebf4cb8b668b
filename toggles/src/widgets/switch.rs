//! Switch widget - a two-state toggle drawn as a track with a sliding thumb.

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use webdom::{Element, NodeRef};

use crate::controller::{ChangeHandler, ControlMode, ToggleState};
use crate::size::Size;
use crate::widget::{Props, Widget, WidgetResult};

/// Switch configuration.
///
/// # Example
///
/// ```
/// use toggles::{Host, Switch};
///
/// let mut host = Host::new();
/// let wifi = host.mount(Switch::new().default_checked(true).aria_label("Wi-Fi"));
/// assert!(host.is_checked(&wifi).unwrap());
/// ```
#[derive(Clone, Default)]
pub struct Switch {
    checked: Option<bool>,
    default_checked: bool,
    disabled: bool,
    on_change: Option<ChangeHandler>,
    size: Size,
    class_name: String,
    aria_label: Option<String>,
}

impl fmt::Debug for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switch")
            .field("checked", &self.checked)
            .field("default_checked", &self.default_checked)
            .field("disabled", &self.disabled)
            .field("on_change", &self.on_change.is_some())
            .field("size", &self.size)
            .field("class_name", &self.class_name)
            .field("aria_label", &self.aria_label)
            .finish()
    }
}

impl Switch {
    /// Create a new switch configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Control the switch with an owner-supplied value.
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

    /// Extra classes for the wrapping label.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Accessible name of the underlying input.
    pub fn aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = Some(aria_label.into());
        self
    }

    pub fn checked_value(&self) -> Option<bool> {
        self.checked
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl Props for Switch {
    type Widget = SwitchWidget;
}

/// A mounted switch.
#[derive(Debug)]
pub struct SwitchWidget {
    props: Switch,
    toggle: ToggleState,
}

impl SwitchWidget {
    pub fn mode(&self) -> ControlMode {
        ToggleState::mode(self.props.checked)
    }

    pub fn toggle_state(&self) -> &ToggleState {
        &self.toggle
    }

    fn describe(&self) -> &str {
        self.props.aria_label.as_deref().unwrap_or("switch")
    }
}

impl Widget for SwitchWidget {
    type Props = Switch;

    const NAME: &'static str = "switch";

    fn mount(props: Switch) -> Self {
        debug!(
            "[switch] mount {} ({})",
            props.aria_label.as_deref().unwrap_or("switch"),
            ToggleState::mode(props.checked)
        );
        Self {
            toggle: ToggleState::new(props.default_checked),
            props,
        }
    }

    fn props(&self) -> &Switch {
        &self.props
    }

    fn update(&mut self, props: Switch) {
        let (before, after) = (self.mode(), ToggleState::mode(props.checked));
        if before != after {
            warn!(
                "[switch] {} switched from {before} to {after}; keep one mode for the widget's lifetime",
                self.describe()
            );
        }
        self.props = props;
    }

    fn element(&self) -> Element {
        let checked = self.is_checked();
        let disabled = self.props.disabled;
        let metrics = self.props.size.switch();

        let input = Element::checkbox_input()
            .class("sr-only")
            .attr_opt("aria-label", self.props.aria_label.as_deref())
            .checked(checked)
            .disabled(disabled);

        let thumb = Element::div()
            .class(metrics.thumb_classes())
            .class(metrics.translate_class(checked))
            .class("bg-white rounded-full shadow-md transform transition-transform duration-200 ease-in-out");

        let track = Element::div()
            .class(metrics.track_classes())
            .class(if checked { "bg-blue-600" } else { "bg-gray-200" })
            .class("rounded-full transition-colors duration-200 ease-in-out")
            .child(thumb);

        Element::label()
            .class("relative inline-flex items-center cursor-pointer")
            .class_if(disabled, "opacity-50 cursor-not-allowed")
            .class(&self.props.class_name)
            .child(input)
            .child(track)
    }

    fn control(&self) -> NodeRef {
        NodeRef::from_indices([0])
    }

    fn is_checked(&self) -> bool {
        self.toggle.displayed(self.props.checked)
    }

    fn handle_change(&self, checked: bool) -> WidgetResult {
        debug!(
            "[switch] {} toggled to {checked} ({})",
            self.describe(),
            self.mode()
        );
        self.toggle
            .handle_change(self.props.checked, checked, self.props.on_change.as_ref());
        WidgetResult::Changed
    }
}
