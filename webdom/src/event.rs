use crate::element::NodeRef;

/// Input events targeted at an element of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer click on an element
    Click { target: NodeRef },
    /// Key press, targeted at the focused element
    Key {
        target: Option<NodeRef>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Element gained focus
    Focus { target: NodeRef },
    /// Element lost focus
    Blur { target: NodeRef },
}

/// A native control changed its checked value in response to user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// The control that changed.
    pub target: NodeRef,
    /// The control's new checked value.
    pub checked: bool,
}

/// Keys the document reacts to. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    BackTab,
    /// A key with no meaning for checkbox controls.
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}
