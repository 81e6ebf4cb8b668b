/// Element tag names understood by the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Span,
    Label,
    Input,
    Svg,
    Path,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Label => "label",
            Tag::Input => "input",
            Tag::Svg => "svg",
            Tag::Path => "path",
        }
    }

    /// Void elements have no closing tag and never carry content.
    pub fn is_void(&self) -> bool {
        matches!(self, Tag::Input | Tag::Path)
    }
}

/// Accessibility role used by queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// `<input type="checkbox">`
    Checkbox,
    /// `<label>`
    Label,
    /// `<svg>` graphics
    Img,
    /// Any other container.
    Generic,
}
