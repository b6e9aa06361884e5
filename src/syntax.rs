//! The syntax tree consumed by the graph builder.
//!
//! A closed set of shapes: the parser lowers the tree-sitter concrete syntax
//! tree into these types, and everything downstream pattern-matches on them
//! exhaustively. Shapes the lowering does not recognise survive as
//! [`TypeExpr::Other`] / [`SyntaxNode::Group`] carrying the grammar's node kind.

/// Direction of a channel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    /// `chan<- T`
    Send,
    /// `<-chan T`
    Recv,
    /// `chan T`
    Both,
}

impl ChanDir {
    /// The Go spelling of the channel keyword for this direction.
    pub fn symbol(self) -> &'static str {
        match self {
            ChanDir::Send => "chan<-",
            ChanDir::Recv => "<-chan",
            ChanDir::Both => "chan",
        }
    }
}

/// A type expression, as written in a field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A bare name: `Widget`, `int`.
    Ident(String),
    /// `*X`
    Pointer(Box<TypeExpr>),
    /// `[]X`, `[N]X`, `[...]X`
    Array(Box<TypeExpr>),
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// `chan X`, `chan<- X`, `<-chan X`
    Chan { dir: ChanDir, elem: Box<TypeExpr> },
    /// A name qualified by its package: `http.Client`.
    Selector {
        qualifier: Box<TypeExpr>,
        name: String,
    },
    /// An inline, unnamed `struct { ... }`.
    Struct(StructType),
    /// An inline, unnamed `interface { ... }`.
    Interface,
    /// Any shape outside the set above, tagged with the grammar node kind.
    Other(String),
}

/// The body of a struct type: its fields in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructType {
    pub fields: Vec<Field>,
}

/// One field declaration.
///
/// `X, Y int` is a single field with two names; an embedded field has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

/// A named type declaration: `type Name T` or, with `alias`, `type Name = T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: String,
    pub alias: bool,
    pub ty: TypeExpr,
}

/// A node of a lowered source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// A type declaration, wherever it occurs in the file.
    TypeDecl(TypeSpec),
    /// Any other construct, kept only for the declarations nested inside it.
    Group {
        kind: String,
        children: Vec<SyntaxNode>,
    },
}

impl SyntaxNode {
    /// A group with the given kind and children.
    pub fn group(kind: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode::Group {
            kind: kind.into(),
            children,
        }
    }
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Ident(name.into())
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        TypeExpr::Pointer(Box::new(inner))
    }

    pub fn array(elem: TypeExpr) -> Self {
        TypeExpr::Array(Box::new(elem))
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn chan(dir: ChanDir, elem: TypeExpr) -> Self {
        TypeExpr::Chan {
            dir,
            elem: Box::new(elem),
        }
    }

    pub fn selector(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        TypeExpr::Selector {
            qualifier: Box::new(TypeExpr::Ident(qualifier.into())),
            name: name.into(),
        }
    }
}
