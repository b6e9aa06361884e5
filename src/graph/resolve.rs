use crate::graph::edge::EdgeKind;
use crate::syntax::TypeExpr;

/// Placeholder name for an inline, unnamed struct type.
pub const ANONYMOUS_STRUCT: &str = "struct{} (unknown name)";

/// Placeholder name for an inline, unnamed interface type.
pub const ANONYMOUS_INTERFACE: &str = "interface (unknown name)";

/// The base name and kind of a field's type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    pub name: String,
    pub kind: EdgeKind,
}

/// Resolve a field's type expression to its base name and outermost kind.
///
/// Total over every [`TypeExpr`]: unrecognised shapes resolve to an
/// [`EdgeKind::Unknown`] whose name describes the shape.
pub fn resolve_type(expr: &TypeExpr) -> ResolvedType {
    let (name, kind) = match expr {
        TypeExpr::Ident(name) => (name.clone(), EdgeKind::Value),
        TypeExpr::Pointer(inner) => (type_name(inner), EdgeKind::Ptr),
        TypeExpr::Array(elem) => (type_name(elem), EdgeKind::Array),
        TypeExpr::Map { .. } => (type_name(expr), EdgeKind::Map),
        TypeExpr::Selector { .. } => (type_name(expr), EdgeKind::Selector),
        TypeExpr::Chan { .. } => (type_name(expr), EdgeKind::Chan),
        TypeExpr::Struct(_) => (type_name(expr), EdgeKind::Struct),
        TypeExpr::Interface => (type_name(expr), EdgeKind::Interface),
        TypeExpr::Other(shape) => (format!("unhandled ({shape})"), EdgeKind::Unknown),
    };
    ResolvedType { name, kind }
}

/// The wrapper-transparent base name of a type expression.
///
/// Pointers and arrays are see-through; maps and channels keep their
/// decoration around the resolved names of their operands.
pub fn type_name(expr: &TypeExpr) -> String {
    match expr {
        TypeExpr::Ident(name) => name.clone(),
        TypeExpr::Pointer(inner) => type_name(inner),
        TypeExpr::Array(elem) => type_name(elem),
        TypeExpr::Map { key, value } => format!("map[{}]{}", type_name(key), type_name(value)),
        TypeExpr::Selector { qualifier, name } => format!("{}.{}", type_name(qualifier), name),
        TypeExpr::Chan { dir, elem } => format!("{} {}", dir.symbol(), type_name(elem)),
        TypeExpr::Struct(_) => ANONYMOUS_STRUCT.to_string(),
        TypeExpr::Interface => ANONYMOUS_INTERFACE.to_string(),
        TypeExpr::Other(shape) => format!("unhandled expr ({shape})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{ChanDir, StructType};

    fn resolved(expr: TypeExpr) -> (String, &'static str) {
        let r = resolve_type(&expr);
        (r.name, r.kind.as_str())
    }

    #[test]
    fn test_wrappers_are_transparent() {
        let t = || TypeExpr::ident("T");
        assert_eq!(resolved(t()), ("T".to_string(), "value"));
        assert_eq!(resolved(TypeExpr::pointer(t())), ("T".to_string(), "ptr"));
        assert_eq!(resolved(TypeExpr::array(t())), ("T".to_string(), "array"));
    }

    #[test]
    fn test_only_outermost_wrapper_is_recorded() {
        let expr = TypeExpr::array(TypeExpr::pointer(TypeExpr::array(TypeExpr::ident("D"))));
        assert_eq!(resolved(expr), ("D".to_string(), "array"));

        let expr = TypeExpr::pointer(TypeExpr::array(TypeExpr::ident("D")));
        assert_eq!(resolved(expr), ("D".to_string(), "ptr"));
    }

    #[test]
    fn test_map_operands_resolve_to_base_names() {
        let expr = TypeExpr::map(
            TypeExpr::ident("string"),
            TypeExpr::array(TypeExpr::pointer(TypeExpr::ident("F"))),
        );
        assert_eq!(resolved(expr), ("map[string]F".to_string(), "map"));
    }

    #[test]
    fn test_nested_map_keeps_inner_decoration() {
        let inner = TypeExpr::map(TypeExpr::ident("int"), TypeExpr::selector("time", "Time"));
        let expr = TypeExpr::map(TypeExpr::ident("string"), inner);
        assert_eq!(
            resolved(expr),
            ("map[string]map[int]time.Time".to_string(), "map")
        );
    }

    #[test]
    fn test_selector() {
        let expr = TypeExpr::selector("http", "Client");
        assert_eq!(resolved(expr), ("http.Client".to_string(), "selector"));

        let expr = TypeExpr::pointer(TypeExpr::selector("sync", "Mutex"));
        assert_eq!(resolved(expr), ("sync.Mutex".to_string(), "ptr"));
    }

    #[test]
    fn test_channel_directions() {
        let elem = || TypeExpr::ident("Event");
        assert_eq!(
            resolved(TypeExpr::chan(ChanDir::Both, elem())),
            ("chan Event".to_string(), "chan")
        );
        assert_eq!(
            resolved(TypeExpr::chan(ChanDir::Send, elem())),
            ("chan<- Event".to_string(), "chan")
        );
        assert_eq!(
            resolved(TypeExpr::chan(ChanDir::Recv, TypeExpr::pointer(elem()))),
            ("<-chan Event".to_string(), "chan")
        );
    }

    #[test]
    fn test_anonymous_aggregates() {
        let expr = TypeExpr::Struct(StructType::default());
        assert_eq!(resolved(expr), (ANONYMOUS_STRUCT.to_string(), "struct"));
        assert_eq!(
            resolved(TypeExpr::Interface),
            (ANONYMOUS_INTERFACE.to_string(), "interface")
        );

        let expr = TypeExpr::array(TypeExpr::Struct(StructType::default()));
        assert_eq!(resolved(expr), (ANONYMOUS_STRUCT.to_string(), "array"));
    }

    #[test]
    fn test_unknown_shapes_never_fail() {
        let expr = TypeExpr::Other("function_type".to_string());
        assert_eq!(
            resolved(expr),
            ("unhandled (function_type)".to_string(), "unknown")
        );

        let expr = TypeExpr::pointer(TypeExpr::Other("generic_type".to_string()));
        assert_eq!(
            resolved(expr),
            ("unhandled expr (generic_type)".to_string(), "ptr")
        );
    }
}
