//! Markup serialization.
//!
//! Serializes an element tree to HTML text. Attribute order is
//! deterministic (class first, then plain attributes and `data-*` keys in
//! sorted order) so serialized output is stable across runs.

use crate::element::{Content, Element};

/// Serialize a subtree to markup text.
pub fn render_to_string(root: &Element) -> String {
    let mut out = String::new();
    render_element(root, &mut out);
    out
}

fn render_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);

    if !element.classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape(&element.classes.join(" ")));
        out.push('"');
    }

    let mut attrs: Vec<(&String, &String)> = element.attrs.iter().collect();
    attrs.sort_by_key(|(k, _)| k.as_str());
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }

    let mut data: Vec<(&String, &String)> = element.data.iter().collect();
    data.sort_by_key(|(k, _)| k.as_str());
    for (key, value) in data {
        out.push_str(" data-");
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }

    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            for child in children {
                render_element(child, out);
            }
        }
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
