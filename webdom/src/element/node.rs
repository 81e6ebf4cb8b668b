use std::collections::BTreeMap;

use super::Content;
use crate::types::{Role, Tag};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,

    // Identity
    /// The `id` attribute. Elements without one can still be reached
    /// through a [`NodeRef`](crate::NodeRef).
    pub id: Option<String>,

    // Content
    pub content: Content,

    // Presentation
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,

    // Input state (rendered as boolean attributes)
    pub checked: bool,
    pub disabled: bool,
    pub required: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            tag: Tag::Div,
            id: None,
            content: Content::None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            checked: false,
            disabled: false,
            required: false,
        }
    }
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    pub fn label() -> Self {
        Self::new(Tag::Label)
    }

    /// Create an `<input type="checkbox">`.
    pub fn checkbox_input() -> Self {
        Self::new(Tag::Input).attr("type", "checkbox")
    }

    pub fn svg() -> Self {
        Self::new(Tag::Svg)
    }

    /// Create an svg `<path>` with the given path data.
    pub fn path(d: impl Into<String>) -> Self {
        Self::new(Tag::Path).attr("d", d)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: Tag::Span,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// Replace the content with text.
    pub fn inner_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Classes

    /// Append whitespace-separated class tokens. Empty input is a no-op.
    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        self.classes
            .extend(classes.as_ref().split_whitespace().map(str::to_string));
        self
    }

    /// Append class tokens only when `condition` holds.
    pub fn class_if(self, condition: bool, classes: impl AsRef<str>) -> Self {
        if condition {
            self.class(classes)
        } else {
            self
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The class list joined the way it appears in markup.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Set an attribute only when a value is present.
    pub fn attr_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(key, value),
            None => self,
        }
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    // Input state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    // Roles

    pub fn role(&self) -> Role {
        match self.tag {
            Tag::Input if self.get_attr("type") == Some("checkbox") => Role::Checkbox,
            Tag::Label => Role::Label,
            Tag::Svg => Role::Img,
            _ => Role::Generic,
        }
    }

    /// Whether this element is a native control that can be activated.
    pub fn is_control(&self) -> bool {
        self.role() == Role::Checkbox
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    /// Append a child only when one is given.
    pub fn child_opt(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
        Content::None => {}
    }
}
