use tree_sitter::Node;

use crate::syntax::{ChanDir, Field, StructType, SyntaxNode, TypeExpr, TypeSpec};

/// Extract the UTF-8 text of a node from the original source bytes.
fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// Lower a tree-sitter `source_file` into the closed syntax tree.
///
/// Every named node is kept, either as a type declaration or as a group, so
/// declarations nested in function bodies survive the lowering.
pub fn lower_source_file(root: Node, source: &[u8]) -> SyntaxNode {
    lower_node(root, source)
}

fn lower_node(node: Node, source: &[u8]) -> SyntaxNode {
    match node.kind() {
        "type_spec" => SyntaxNode::TypeDecl(lower_type_spec(node, source, false)),
        "type_alias" => SyntaxNode::TypeDecl(lower_type_spec(node, source, true)),
        kind => {
            let mut cursor = node.walk();
            let children = node
                .named_children(&mut cursor)
                .map(|child| lower_node(child, source))
                .collect();
            SyntaxNode::group(kind, children)
        }
    }
}

fn lower_type_spec(node: Node, source: &[u8], alias: bool) -> TypeSpec {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default();
    let ty = node
        .child_by_field_name("type")
        .map(|t| lower_type(t, source))
        .unwrap_or_else(|| TypeExpr::Other(node.kind().to_string()));
    TypeSpec { name, alias, ty }
}

/// Lower a type expression node. Unrecognised shapes become
/// [`TypeExpr::Other`] tagged with their node kind.
fn lower_type(node: Node, source: &[u8]) -> TypeExpr {
    match node.kind() {
        "type_identifier" | "identifier" | "package_identifier" => {
            TypeExpr::ident(node_text(node, source))
        }
        "pointer_type" => match first_named_child(node) {
            Some(inner) => TypeExpr::pointer(lower_type(inner, source)),
            None => other(node),
        },
        "slice_type" | "array_type" | "implicit_length_array_type" => {
            match node.child_by_field_name("element") {
                Some(elem) => TypeExpr::array(lower_type(elem, source)),
                None => other(node),
            }
        }
        "map_type" => match (
            node.child_by_field_name("key"),
            node.child_by_field_name("value"),
        ) {
            (Some(key), Some(value)) => {
                TypeExpr::map(lower_type(key, source), lower_type(value, source))
            }
            _ => other(node),
        },
        "channel_type" => match node.child_by_field_name("value") {
            Some(value) => TypeExpr::chan(channel_dir(node), lower_type(value, source)),
            None => other(node),
        },
        "qualified_type" => match (
            node.child_by_field_name("package"),
            node.child_by_field_name("name"),
        ) {
            (Some(package), Some(name)) => {
                TypeExpr::selector(node_text(package, source), node_text(name, source))
            }
            _ => other(node),
        },
        "struct_type" => TypeExpr::Struct(lower_struct(node, source)),
        "interface_type" => TypeExpr::Interface,
        _ => other(node),
    }
}

fn other(node: Node) -> TypeExpr {
    TypeExpr::Other(node.kind().to_string())
}

fn first_named_child(node: Node) -> Option<Node> {
    let mut cursor = node.walk();
    let child = node.named_children(&mut cursor).next();
    child
}

/// Direction of a `channel_type`, read off the order of its anonymous tokens.
fn channel_dir(node: Node) -> ChanDir {
    let mut cursor = node.walk();
    let tokens: Vec<&str> = node
        .children(&mut cursor)
        .filter(|c| !c.is_named())
        .map(|c| c.kind())
        .collect();
    match tokens.as_slice() {
        ["<-", "chan", ..] => ChanDir::Recv,
        ["chan", "<-", ..] => ChanDir::Send,
        _ => ChanDir::Both,
    }
}

fn lower_struct(node: Node, source: &[u8]) -> StructType {
    let mut fields = Vec::new();
    let mut cursor = node.walk();
    for list in node.named_children(&mut cursor) {
        if list.kind() != "field_declaration_list" {
            continue;
        }
        let mut list_cursor = list.walk();
        for decl in list.named_children(&mut list_cursor) {
            if decl.kind() == "field_declaration" {
                fields.push(lower_field(decl, source));
            }
        }
    }
    StructType { fields }
}

fn lower_field(node: Node, source: &[u8]) -> Field {
    let mut cursor = node.walk();
    let names: Vec<String> = node
        .children_by_field_name("name", &mut cursor)
        .map(|n| node_text(n, source).to_string())
        .collect();

    let mut ty = node
        .child_by_field_name("type")
        .map(|t| lower_type(t, source))
        .unwrap_or_else(|| other(node));

    // An embedded `*T` is a bare `*` token on the declaration, not a pointer_type.
    if names.is_empty() {
        let mut cursor = node.walk();
        let starred = node
            .children(&mut cursor)
            .any(|c| !c.is_named() && c.kind() == "*");
        if starred {
            ty = TypeExpr::pointer(ty);
        }
    }

    Field { names, ty }
}
