pub mod dot;
pub mod filter;
pub mod json;
pub mod mermaid;
pub mod model;

use crate::graph::GraphDocument;

use filter::visible_edges;
use model::{ExportFormat, ExportParams};

/// Render the document in the requested format.
///
/// The visibility filter is applied here, as a view over the document's
/// edges; the document itself is left untouched.
pub fn export_graph(doc: &GraphDocument, params: &ExportParams) -> anyhow::Result<String> {
    let edges = visible_edges(doc.edges(), params.public_only);
    let content = match params.format {
        ExportFormat::Dot => dot::render_dot(edges),
        ExportFormat::Mermaid => mermaid::render_mermaid(edges),
        ExportFormat::Json => json::render_json(edges)?,
    };
    Ok(content)
}
