use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How a method receiver (or a constructor result) refers to its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiverKind {
    Pointer,
    Value,
}

impl ReceiverKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReceiverKind::Pointer => "pointer",
            ReceiverKind::Value => "value",
        }
    }
}

impl fmt::Display for ReceiverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syntactic shape of a type expression as written in source.
///
/// This is not a resolved type: `Qualified` and `Generic` are kept apart from
/// `Ident` so that callers can refuse to guess what they refer to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// A bare type name, e.g. `Widget`.
    Ident(String),
    /// `*X`.
    Pointer(Box<TypeExpr>),
    /// `pkg.Name`.
    Qualified { package: String, name: String },
    /// `Base[A, B]`.
    Generic { base: Box<TypeExpr>, args: Vec<TypeExpr> },
    /// `(X)`.
    Paren(Box<TypeExpr>),
    /// Slices, maps, channels, function types, literals... kept as raw text.
    Other(String),
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Ident(name.into())
    }

    pub fn pointer_to(name: impl Into<String>) -> Self {
        TypeExpr::Pointer(Box::new(TypeExpr::Ident(name.into())))
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Ident(name) => f.write_str(name),
            TypeExpr::Pointer(inner) => write!(f, "*{inner}"),
            TypeExpr::Qualified { package, name } => write!(f, "{package}.{name}"),
            TypeExpr::Generic { base, args } => {
                write!(f, "{base}[")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str("]")
            }
            TypeExpr::Paren(inner) => write!(f, "({inner})"),
            TypeExpr::Other(text) => f.write_str(text),
        }
    }
}

/// One entry of a method's receiver list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverBinding {
    /// Binding name (`s` in `func (s *T)`); `None` for `func (*T)`.
    pub name: Option<String>,
    /// `None` when the parser recovered from a syntax error without a type.
    pub type_expr: Option<TypeExpr>,
}

impl ReceiverBinding {
    pub fn new(name: Option<&str>, type_expr: TypeExpr) -> Self {
        Self {
            name: name.map(str::to_string),
            type_expr: Some(type_expr),
        }
    }
}

/// Where a declaration starts (1-based line and column).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePosition {
    pub file: PathBuf,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// A top-level `func` declaration: a plain function or a method.
///
/// Produced by a front end and read-only from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    /// `None` only when the source was too broken to name the function.
    pub name: Option<String>,
    /// Empty for plain functions. Normally exactly one entry for methods.
    pub receivers: Vec<ReceiverBinding>,
    /// Declared result types, one entry per result parameter declaration.
    pub results: Vec<TypeExpr>,
    pub position: SourcePosition,
}

impl FunctionDeclaration {
    pub fn is_method(&self) -> bool {
        !self.receivers.is_empty()
    }

    /// Go export rule: the name starts with an upper-case letter.
    pub fn is_exported(&self) -> bool {
        self.name
            .as_deref()
            .and_then(|n| n.chars().next())
            .is_some_and(char::is_uppercase)
    }

    pub fn name_or_placeholder(&self) -> &str {
        self.name.as_deref().unwrap_or("_")
    }

    /// The file this declaration was read from.
    pub fn source_file(&self) -> &Path {
        &self.position.file
    }
}
