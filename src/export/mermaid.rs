use std::collections::HashMap;
use std::fmt::Write;

use crate::graph::edge::Edge;

/// Escape a string for safe use in Mermaid node labels (quotes and brackets break the syntax).
fn escape_mermaid_label(s: &str) -> String {
    s.replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('[', "&#91;")
        .replace(']', "&#93;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

/// Render edges as a Mermaid flowchart.
///
/// Each distinct name gets a node id `n<k>`, numbered by first appearance, so
/// names that differ only in punctuation (`map[string]T` vs `map_string_T`)
/// never share a node.
pub fn render_mermaid<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> String {
    let mut out = String::new();
    writeln!(out, "flowchart LR").unwrap();

    let mut ids: HashMap<&str, usize> = HashMap::new();
    for edge in edges {
        let left = node_ref(&mut ids, &edge.left);
        let right = node_ref(&mut ids, &edge.right);
        if edge.label.is_empty() {
            writeln!(out, "    {} --> {}", left, right).unwrap();
        } else {
            writeln!(
                out,
                "    {} -->|{}| {}",
                left,
                escape_mermaid_label(&edge.label),
                right
            )
            .unwrap();
        }
    }

    out
}

/// `n<k>["name"]` for a name's first appearance, bare `n<k>` afterwards.
fn node_ref<'a>(ids: &mut HashMap<&'a str, usize>, name: &'a str) -> String {
    if let Some(id) = ids.get(name) {
        return format!("n{}", id);
    }
    let id = ids.len();
    ids.insert(name, id);
    format!("n{}[\"{}\"]", id, escape_mermaid_label(name))
}
