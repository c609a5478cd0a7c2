//! HTML escaping and attribute string building shared by the helpers

use crate::element::Attributes;

/// Escape text for use in HTML content or a quoted attribute value
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Build `key="value"` pairs separated by single spaces (no leading space)
pub fn attributes_string(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", escape_html(key), escape_html(value)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Same as `attributes_string` but with a leading space when non-empty,
/// ready to drop straight after a tag name
pub fn attributes_suffix(attributes: &Attributes) -> String {
    if attributes.is_empty() {
        String::new()
    } else {
        format!(" {}", attributes_string(attributes))
    }
}
