pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod query;
pub mod render;
pub mod types;

pub use document::{Document, NativeInput};
pub use element::{find_by_id, find_element, Content, Element, NodeRef};
pub use event::{ChangeEvent, Event, Key, Modifiers};
pub use focus::{collect_focusable, FocusState};
pub use hit::activation_target;
pub use render::{to_html, to_html_pretty};
pub use types::*;
