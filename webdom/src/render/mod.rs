//! HTML serialization.
//!
//! Output is deterministic: `id` first, then `class`, then the remaining
//! attributes in name order, then boolean attributes. Native-only state
//! such as `indeterminate` is not part of the markup.

use std::fmt::Write;

use crate::element::{Content, Element};

/// Serialize an element tree on a single line.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, None, &mut out);
    out
}

/// Serialize an element tree with one element per line, indented by two
/// spaces per level.
pub fn to_html_pretty(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, Some(0), &mut out);
    out
}

fn write_element(element: &Element, depth: Option<usize>, out: &mut String) {
    if let Some(depth) = depth {
        out.push_str(&"  ".repeat(depth));
    }

    let tag = element.tag.as_str();
    out.push('<');
    out.push_str(tag);
    write_attributes(element, out);

    if element.tag.is_void() {
        out.push_str(" />");
        if depth.is_some() {
            out.push('\n');
        }
        return;
    }
    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            if let Some(depth) = depth {
                out.push('\n');
                for child in children {
                    write_element(child, Some(depth + 1), out);
                }
                out.push_str(&"  ".repeat(depth));
            } else {
                for child in children {
                    write_element(child, None, out);
                }
            }
        }
    }

    let _ = write!(out, "</{tag}>");
    if depth.is_some() {
        out.push('\n');
    }
}

fn write_attributes(element: &Element, out: &mut String) {
    if let Some(id) = &element.id {
        let _ = write!(out, " id=\"{}\"", escape(id));
    }
    if !element.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&element.class_name()));
    }
    for (key, value) in &element.attrs {
        let _ = write!(out, " {key}=\"{}\"", escape(value));
    }
    for (name, set) in [
        ("checked", element.checked),
        ("disabled", element.disabled),
        ("required", element.required),
    ] {
        if set {
            out.push(' ');
            out.push_str(name);
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn test_escape_markup_characters() {
        assert_eq!(escape(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
        assert_eq!(escape("plain"), "plain");
    }
}
