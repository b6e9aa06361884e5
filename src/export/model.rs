use serde::Deserialize;

/// Output format for the rendered graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Graphviz DOT format (default).
    #[default]
    Dot,
    /// Mermaid flowchart, for embedding in markdown.
    Mermaid,
    /// JSON array of `{left, right, label}` objects.
    Json,
}

/// Parameters controlling a graph export.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExportParams {
    /// Output format.
    pub format: ExportFormat,
    /// Keep only edges whose two endpoints are exported identifiers.
    pub public_only: bool,
}
