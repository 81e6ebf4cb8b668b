//! Built-in widgets.
//!
//! Each widget is split in two:
//! - a props builder (`Checkbox`, `Switch`) that the owner creates on every render
//! - a mounted widget (`CheckboxWidget`, `SwitchWidget`) that the host keeps
//!   alive between renders and that produces a webdom Element

pub mod checkbox;
pub mod switch;

pub use checkbox::{Checkbox, CheckboxWidget};
pub use switch::{Switch, SwitchWidget};
