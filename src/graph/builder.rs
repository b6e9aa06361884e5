use crate::graph::edge::Edge;
use crate::graph::resolve::resolve_type;
use crate::syntax::{SyntaxNode, TypeExpr, TypeSpec};

/// Extract one edge per struct field from a lowered source file.
///
/// Walks the whole tree depth-first, so struct declarations nested in
/// function bodies or blocks are found as well. Edges come back in encounter
/// order; declarations whose type is not a struct contribute nothing.
pub fn extract_edges(root: &SyntaxNode) -> Vec<Edge> {
    let mut edges = Vec::new();
    collect(root, &mut edges);
    edges
}

fn collect(node: &SyntaxNode, out: &mut Vec<Edge>) {
    match node {
        SyntaxNode::TypeDecl(spec) => out.extend(struct_edges(spec)),
        SyntaxNode::Group { kind, children } => {
            for child in children {
                if let SyntaxNode::TypeDecl(spec) = child {
                    tracing::trace!(name = %spec.name, parent = %kind, "type declaration");
                }
                collect(child, out);
            }
        }
    }
}

/// The edges of a single type declaration.
fn struct_edges(spec: &TypeSpec) -> Vec<Edge> {
    let TypeExpr::Struct(body) = &spec.ty else {
        tracing::trace!(name = %spec.name, alias = spec.alias, "not a struct, skipped");
        return Vec::new();
    };
    body.fields
        .iter()
        .map(|field| {
            let resolved = resolve_type(&field.ty);
            tracing::trace!(
                left = %spec.name,
                field = %field.names.join(", "),
                right = %resolved.name,
                kind = %resolved.kind,
                "edge"
            );
            Edge::new(spec.name.as_str(), resolved.name, resolved.kind)
        })
        .collect()
}
