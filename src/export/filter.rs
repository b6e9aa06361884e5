use crate::graph::edge::Edge;

/// Whether both endpoints of `edge` are exported identifiers, i.e. non-empty
/// and starting with an upper-case letter.
///
/// Only the two names are inspected; the label plays no part.
pub fn is_public(edge: &Edge) -> bool {
    starts_upper(&edge.left) && starts_upper(&edge.right)
}

/// Uses the Unicode `Uppercase` property, which is slightly wider than Go's
/// category `Lu`: `Other_Uppercase` characters such as the circled letters
/// (`Ⓐ`) count as upper-case here, although Go would not export them.
fn starts_upper(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// The edges to render, in document order. With `public_only` unset every
/// edge is kept.
pub fn visible_edges(edges: &[Edge], public_only: bool) -> impl Iterator<Item = &Edge> {
    edges
        .iter()
        .filter(move |edge| !public_only || is_public(edge))
}
