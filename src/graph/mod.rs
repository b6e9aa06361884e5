pub mod builder;
pub mod edge;
pub mod resolve;

use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};
use crate::parser::parse_file;

use builder::extract_edges;
use edge::Edge;

/// The edges of a whole run, in the order their source files were processed.
///
/// Append-only: units are added whole, and nothing is removed or edited.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GraphDocument {
    edges: Vec<Edge>,
}

impl GraphDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the edges of one processed unit.
    pub fn append(&mut self, unit: Vec<Edge>) {
        self.edges.extend(unit);
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Read, parse and extract the edges of a single Go source file.
pub fn process_file(path: &Path) -> Result<Vec<Edge>> {
    let source = std::fs::read(path).map_err(|source| GraphError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = parse_file(path, &source)?;
    Ok(extract_edges(&tree))
}

/// Build the run's document from `units`, strictly one at a time.
///
/// Fail-fast: the first unit that fails ends the run, and the edges gathered
/// from earlier units are dropped with the partial document.
pub fn build_document<F>(units: &[PathBuf], mut process: F) -> Result<GraphDocument>
where
    F: FnMut(&Path) -> Result<Vec<Edge>>,
{
    if units.is_empty() {
        return Err(GraphError::Usage);
    }

    let mut doc = GraphDocument::new();
    for path in units {
        let edges = process(path)?;
        tracing::debug!(path = %path.display(), edges = edges.len(), "processed");
        doc.append(edges);
    }
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use edge::EdgeKind;
    use std::fs;

    fn unit(left: &str, right: &str) -> Vec<Edge> {
        vec![Edge::new(left, right, EdgeKind::Value)]
    }

    #[test]
    fn test_no_units_is_a_usage_error() {
        let result = build_document(&[], |_| Ok(Vec::new()));
        assert!(matches!(result, Err(GraphError::Usage)));
    }

    #[test]
    fn test_units_are_concatenated_in_order() {
        let units = vec![PathBuf::from("a.go"), PathBuf::from("b.go")];
        let doc = build_document(&units, |p| {
            Ok(unit(p.file_stem().unwrap().to_str().unwrap(), "int"))
        })
        .unwrap();
        let lefts: Vec<&str> = doc.edges().iter().map(|e| e.left.as_str()).collect();
        assert_eq!(lefts, vec!["a", "b"]);
    }

    #[test]
    fn test_failure_aborts_remaining_units() {
        let units = vec![
            PathBuf::from("good.go"),
            PathBuf::from("bad.go"),
            PathBuf::from("never.go"),
        ];
        let mut seen = Vec::new();
        let result = build_document(&units, |p| {
            seen.push(p.to_path_buf());
            if p.ends_with("bad.go") {
                Err(GraphError::Parse {
                    path: p.to_path_buf(),
                    line: 1,
                    column: 1,
                    message: "boom".to_string(),
                })
            } else {
                Ok(unit("Good", "int"))
            }
        });
        assert!(matches!(result, Err(GraphError::Parse { .. })));
        assert_eq!(seen.len(), 2, "units after the failing one must not be processed");
    }

    #[test]
    fn test_process_file_reads_and_extracts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("a.go");
        fs::write(
            &path,
            "package a\n\ntype A struct {\n\tB int\n\tC []*D\n\tE map[string]F\n}\n",
        )
        .unwrap();
        let edges = process_file(&path).unwrap();
        assert_eq!(
            edges,
            vec![
                Edge::new("A", "int", EdgeKind::Value),
                Edge::new("A", "D", EdgeKind::Array),
                Edge::new("A", "map[string]F", EdgeKind::Map),
            ]
        );
    }

    #[test]
    fn test_process_file_missing_file_is_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = process_file(&dir.path().join("missing.go"));
        assert!(matches!(result, Err(GraphError::Read { .. })));
    }

    #[test]
    fn test_reprocessing_is_deterministic() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("w.go");
        fs::write(
            &path,
            "package w\n\ntype Widget struct {\n\tParts []Part\n\tOwner *user.User\n}\n",
        )
        .unwrap();
        let units = vec![path.clone(), path];
        let first = build_document(&units, process_file).unwrap();
        let second = build_document(&units, process_file).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }
}
