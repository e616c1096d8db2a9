//! HTML serialization with escaping at every interpolation point.

use super::{Document, NodeId};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Escape text content.
pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub(super) fn write_node(doc: &Document, node: NodeId, out: &mut String) {
    if let Some(text) = doc.text_of(node) {
        out.push_str(&escape_text(text));
        return;
    }
    let Some(el) = doc.element(node) else {
        return;
    };

    out.push('<');
    out.push_str(&el.tag);

    // id first, then class, then the rest in insertion order
    if let Some(id) = el.attr("id") {
        push_attr(out, "id", id);
    }
    if !el.classes.is_empty() {
        push_attr(out, "class", &el.classes.join(" "));
    }
    for (name, value) in el.attrs.iter().filter(|(k, _)| k != "id") {
        push_attr(out, name, value);
    }
    if !el.styles.is_empty() {
        let style = el
            .styles
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("; ");
        push_attr(out, "style", &style);
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&el.tag.as_str()) {
        return;
    }
    for child in doc.children(node) {
        write_node(doc, *child, out);
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}
