//! Inline `style=""` attribute handling.
//!
//! Gallery cards use inline styles for two hooks only: the optional
//! background image and the zero-height anchor offsets the ToC inserts.

use crate::dom::DomNode;

/// Parse an inline `style="..."` attribute value into ordered declarations.
pub fn parse_inline_style(style: &str) -> Vec<(String, String)> {
    let mut decls = Vec::new();
    for decl in split_declarations(style) {
        let Some((prop, val)) = decl.split_once(':') else {
            continue;
        };
        let prop = prop.trim().to_ascii_lowercase();
        let val = val.trim();
        if prop.is_empty() || val.is_empty() {
            continue;
        }
        decls.push((prop, val.to_string()));
    }
    decls
}

/// Split on `;` outside quotes, parentheses and backslash escapes.
fn split_declarations(style: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in style.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                parts.push(&style[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&style[start..]);
    parts
}

/// Render declarations back to `prop: value; prop: value` form.
pub fn serialize_inline_style(decls: &[(String, String)]) -> String {
    decls
        .iter()
        .map(|(p, v)| format!("{}: {}", p, v))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Read a single property from a node's inline style.
pub fn style_property(node: &DomNode, prop: &str) -> Option<String> {
    parse_inline_style(node.attr("style")?)
        .into_iter()
        .find(|(p, _)| p == prop)
        .map(|(_, v)| v)
}

/// Set (or replace) a property in a node's inline style.
pub fn set_style_property(node: &mut DomNode, prop: &str, value: &str) {
    let mut decls = node.attr("style").map(parse_inline_style).unwrap_or_default();
    match decls.iter_mut().find(|(p, _)| p == prop) {
        Some(decl) => decl.1 = value.to_string(),
        None => decls.push((prop.to_string(), value.to_string())),
    }
    let style = serialize_inline_style(&decls);
    node.set_attr("style", style);
}

/// `url('...')` value for `background-image`, with quotes and backslashes escaped.
pub fn css_url(src: &str) -> String {
    let mut escaped = String::with_capacity(src.len());
    for c in src.chars() {
        match c {
            '\'' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' | '\r' => {}
            _ => escaped.push(c),
        }
    }
    format!("url('{}')", escaped)
}

/// Target of a `url(...)` value, quoted or not. Inverse of [`css_url`].
pub fn css_url_target(value: &str) -> Option<String> {
    let inner = value.trim().strip_prefix("url(")?.strip_suffix(')')?.trim();
    let inner = match inner.chars().next() {
        Some(q @ ('\'' | '"')) => inner.strip_prefix(q)?.strip_suffix(q)?,
        _ => inner,
    };
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.extend(chars.next());
        } else {
            out.push(c);
        }
    }
    (!out.is_empty()).then_some(out)
}
