//! Checkbox and switch controls rendered into a webdom document.
//!
//! Both widgets share one state-ownership contract (see [`controller`]):
//! controlled when the owner passes `checked`, uncontrolled otherwise.

pub mod controller;
pub mod host;
pub mod id;
pub mod size;
pub mod state;
pub mod widget;
pub mod widgets;

pub use controller::{ChangeHandler, ControlMode, ToggleState};
pub use host::{Handle, Host, HostError};
pub use id::InstanceId;
pub use size::{Size, SizeParseError, SwitchMetrics};
pub use state::State;
pub use widget::{Props, Widget, WidgetResult};
pub use widgets::{Checkbox, CheckboxWidget, Switch, SwitchWidget};

pub mod prelude {
    pub use crate::controller::{ChangeHandler, ControlMode};
    pub use crate::host::{Handle, Host, HostError};
    pub use crate::size::Size;
    pub use crate::widget::{Widget, WidgetResult};
    pub use crate::widgets::{Checkbox, Switch};

    pub use webdom::{Element, Key, Modifiers, NodeRef};
}
