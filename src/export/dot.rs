use std::fmt::Write;

use crate::graph::edge::Edge;

/// Render edges as a Graphviz digraph.
///
/// ```text
/// DiGraph {
///     "A" -> "B" [label="ptr"]
/// }
/// ```
///
/// Names and labels are written verbatim: a `"` inside a name produces
/// invalid DOT. Go identifiers cannot contain quotes, so this only matters for
/// the diagnostic names of unrecognised type shapes.
pub fn render_dot<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> String {
    let mut out = String::new();
    writeln!(out, "DiGraph {{").unwrap();
    for edge in edges {
        write!(out, "    \"{}\" -> \"{}\"", edge.left, edge.right).unwrap();
        if !edge.label.is_empty() {
            write!(out, " [label=\"{}\"]", edge.label).unwrap();
        }
        out.push('\n');
    }
    writeln!(out, "}}").unwrap();
    out
}
