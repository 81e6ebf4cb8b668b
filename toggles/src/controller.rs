//! Controlled/uncontrolled state ownership shared by every toggle widget.
//!
//! A widget always keeps an internal value cell. When the owner supplies a
//! `checked` value the widget is controlled: that value is what renders and
//! interactions only report the requested value. Without one, the internal
//! cell renders and interactions write to it.

use std::fmt;
use std::sync::Arc;

use crate::state::State;

/// Callback invoked with the new checked value after a user toggle.
pub type ChangeHandler = Arc<dyn Fn(bool) + Send + Sync>;

/// Who owns the displayed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// The owner supplies the value on every render.
    Controlled,
    /// The widget tracks its own value.
    Uncontrolled,
}

impl ControlMode {
    /// Mode implied by the presence of an external value.
    pub fn of(checked: Option<bool>) -> Self {
        if checked.is_some() {
            ControlMode::Controlled
        } else {
            ControlMode::Uncontrolled
        }
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlMode::Controlled => write!(f, "controlled"),
            ControlMode::Uncontrolled => write!(f, "uncontrolled"),
        }
    }
}

/// The internal value cell plus the rules for reading and writing it.
#[derive(Debug, Clone)]
pub struct ToggleState {
    internal: State<bool>,
}

impl ToggleState {
    /// Seed the internal value. It is never re-seeded afterwards.
    pub fn new(default_checked: bool) -> Self {
        Self {
            internal: State::new(default_checked),
        }
    }

    pub fn mode(checked: Option<bool>) -> ControlMode {
        ControlMode::of(checked)
    }

    /// Current internal value, whether or not it is the one displayed.
    pub fn internal(&self) -> bool {
        self.internal.get()
    }

    /// The value to render: the external one if present, else the internal one.
    pub fn displayed(&self, checked: Option<bool>) -> bool {
        checked.unwrap_or_else(|| self.internal.get())
    }

    /// Apply a user toggle that reported `new_value`.
    ///
    /// Uncontrolled widgets store the value. The handler, if any, is called
    /// exactly once in both modes; the external value is never touched.
    pub fn handle_change(
        &self,
        checked: Option<bool>,
        new_value: bool,
        on_change: Option<&ChangeHandler>,
    ) {
        if Self::mode(checked) == ControlMode::Uncontrolled {
            let previous = self.internal.replace(new_value);
            log::trace!("[toggle] internal {previous} -> {new_value}");
        }

        if let Some(handler) = on_change {
            handler(new_value);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    fn recorder() -> (ChangeHandler, Arc<Mutex<Vec<bool>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let handler: ChangeHandler = Arc::new(move |v| sink.lock().unwrap().push(v));
        (handler, calls)
    }

    #[test]
    fn test_uncontrolled_writes_internal() {
        let state = ToggleState::new(false);
        state.handle_change(None, true, None);
        assert!(state.internal());
        assert!(state.displayed(None));
    }

    #[test]
    fn test_controlled_leaves_internal_alone() {
        let state = ToggleState::new(false);
        let (handler, calls) = recorder();

        state.handle_change(Some(false), true, Some(&handler));

        assert!(!state.internal());
        assert!(!state.displayed(Some(false)));
        assert_eq!(*calls.lock().unwrap(), vec![true]);
    }

    #[test]
    fn test_displayed_prefers_external() {
        let state = ToggleState::new(true);
        assert!(!state.displayed(Some(false)));
        assert!(state.displayed(None));
    }

    #[test]
    fn test_mode_from_presence() {
        assert_eq!(ControlMode::of(Some(false)), ControlMode::Controlled);
        assert_eq!(ControlMode::of(None), ControlMode::Uncontrolled);
        assert_eq!(ControlMode::Controlled.to_string(), "controlled");
    }
}
