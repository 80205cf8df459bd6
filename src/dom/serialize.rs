//! DomNode → HTML text.
//!
//! Attributes are written in sorted order so output is stable across runs
//! regardless of `HashMap` iteration order.

use crate::dom::{DomNode, NodeType};

/// Elements that never take a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Serialize a node (and its subtree) to HTML.
pub fn to_html(node: &DomNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Serialize only the children of `node`, like reading `innerHTML`.
pub fn inner_html(node: &DomNode) -> String {
    let mut out = String::new();
    for child in &node.children {
        write_node(child, &mut out);
    }
    out
}

fn write_node(node: &DomNode, out: &mut String) {
    match node.node_type {
        NodeType::Document => {
            out.push_str("<!DOCTYPE html>\n");
            for child in &node.children {
                write_node(child, out);
            }
        }
        NodeType::Text => out.push_str(&escape_text(&node.text)),
        NodeType::Raw => out.push_str(&node.text),
        NodeType::Comment => {
            out.push_str("<!--");
            out.push_str(&node.text);
            out.push_str("-->");
        }
        NodeType::Element => {
            out.push('<');
            out.push_str(&node.tag);

            let mut attrs: Vec<(&String, &String)> = node.attributes.iter().collect();
            attrs.sort();
            for (name, value) in attrs {
                out.push(' ');
                out.push_str(name);
                if !value.is_empty() {
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
            }
            out.push('>');

            if VOID_TAGS.contains(&node.tag.as_str()) {
                return;
            }
            for child in &node.children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(&node.tag);
            out.push('>');
        }
    }
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
