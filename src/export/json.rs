use crate::graph::edge::Edge;

/// Render edges as a pretty-printed JSON array of `{left, right, label}` objects.
pub fn render_json<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> serde_json::Result<String> {
    let edges: Vec<&Edge> = edges.into_iter().collect();
    let mut out = serde_json::to_string_pretty(&edges)?;
    out.push('\n');
    Ok(out)
}
