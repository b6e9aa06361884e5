use serde::Serialize;

/// How a struct field refers to the type on the right-hand side of an edge.
///
/// Only the outermost wrapper of the field's type is recorded: `[]*T` is an
/// `Array` edge to `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Plain named type.
    Value,
    /// `*T`
    Ptr,
    /// Slice or array.
    Array,
    /// `map[K]V`
    Map,
    /// Package-qualified name.
    Selector,
    /// Channel of any direction.
    Chan,
    /// Anonymous inline struct.
    Struct,
    /// Anonymous inline interface.
    Interface,
    /// Unrecognised shape. The resolved name carries the diagnostic.
    Unknown,
}

impl EdgeKind {
    /// The label string written into rendered graphs.
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeKind::Value => "value",
            EdgeKind::Ptr => "ptr",
            EdgeKind::Array => "array",
            EdgeKind::Map => "map",
            EdgeKind::Selector => "selector",
            EdgeKind::Chan => "chan",
            EdgeKind::Struct => "struct",
            EdgeKind::Interface => "interface",
            EdgeKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed struct -> field type relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Name of the declaring struct type.
    pub left: String,
    /// Resolved base name of the field's type.
    pub right: String,
    /// Rendered kind label. Empty labels are rendered without an attribute.
    pub label: String,
}

impl Edge {
    pub fn new(left: impl Into<String>, right: impl Into<String>, kind: EdgeKind) -> Self {
        Edge {
            left: left.into(),
            right: right.into(),
            label: kind.as_str().to_string(),
        }
    }
}
