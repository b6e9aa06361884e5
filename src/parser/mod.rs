pub mod lower;

use std::cell::RefCell;
use std::path::Path;

use tree_sitter::{Node, Parser};

use crate::error::{GraphError, Result};
use crate::syntax::SyntaxNode;

use lower::lower_source_file;

// One Go parser per thread, initialised on first use.
thread_local! {
    static PARSER_GO: RefCell<Option<Parser>> = const { RefCell::new(None) };
}

/// Parse a Go source file and lower it into a [`SyntaxNode`] tree.
///
/// # Errors
/// - [`GraphError::Language`] if the Go grammar cannot be loaded.
/// - [`GraphError::Parse`] if tree-sitter gives up on the input or the
///   resulting tree contains an error or missing node. The reported position
///   is that of the first such node in document order. A file that does
///   not open with a package clause (an empty file included) is also
///   rejected, at 1:1.
pub fn parse_file(path: &Path, source: &[u8]) -> Result<SyntaxNode> {
    let tree = PARSER_GO.with(|cell| -> Result<_> {
        let mut slot = cell.borrow_mut();
        let mut parser = match slot.take() {
            Some(parser) => parser,
            None => go_parser()?,
        };
        let tree = parser.parse(source, None);
        *slot = Some(parser);
        Ok(tree)
    })?;

    let tree = tree.ok_or_else(|| GraphError::Parse {
        path: path.to_path_buf(),
        line: 1,
        column: 1,
        message: "parser returned no tree".to_string(),
    })?;

    let root = tree.root_node();
    if root.has_error() {
        let bad = first_error(root).unwrap_or(root);
        let pos = bad.start_position();
        return Err(GraphError::Parse {
            path: path.to_path_buf(),
            line: pos.row + 1,
            column: pos.column + 1,
            message: describe_error(bad, source),
        });
    }

    // tree-sitter-go accepts files without a package clause; Go does not.
    if !starts_with_package_clause(root) {
        return Err(GraphError::Parse {
            path: path.to_path_buf(),
            line: 1,
            column: 1,
            message: "expected 'package'".to_string(),
        });
    }

    Ok(lower_source_file(root, source))
}

/// Whether the first non-comment top-level node is a `package_clause`.
fn starts_with_package_clause(root: Node) -> bool {
    let mut cursor = root.walk();
    let first = root
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    first.is_some_and(|child| child.kind() == "package_clause")
}

fn go_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_go::LANGUAGE.into())?;
    Ok(parser)
}

/// The first `ERROR` or missing node under `node`, depth-first.
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    None
}

fn describe_error(node: Node, source: &[u8]) -> String {
    if node.is_missing() {
        return format!("expected {}", node.kind());
    }
    let text = node.utf8_text(source).unwrap_or("");
    let snippet: String = text.lines().next().unwrap_or("").chars().take(40).collect();
    if snippet.trim().is_empty() {
        "syntax error".to_string()
    } else {
        format!("syntax error near `{}`", snippet.trim())
    }
}
