//! Receiver classification: which type a receiver binds, and how.

use recvcheck_core::types::{ReceiverKind, TypeExpr};

/// Outcome of classifying one receiver (or result) type expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified<'a> {
    Pointer(&'a str),
    Value(&'a str),
    /// Any shape other than `T` or `*T`. Never guessed at.
    Unrecognized,
}

impl<'a> Classified<'a> {
    pub fn type_name(&self) -> Option<&'a str> {
        match *self {
            Classified::Pointer(name) | Classified::Value(name) => Some(name),
            Classified::Unrecognized => None,
        }
    }

    pub fn kind(&self) -> Option<ReceiverKind> {
        match self {
            Classified::Pointer(_) => Some(ReceiverKind::Pointer),
            Classified::Value(_) => Some(ReceiverKind::Value),
            Classified::Unrecognized => None,
        }
    }
}

/// `*T` is a pointer use of `T`, bare `T` a value use. Qualified names,
/// generic instantiations, parenthesized forms and everything else are
/// unrecognized.
pub fn classify(expr: &TypeExpr) -> Classified<'_> {
    match expr {
        TypeExpr::Pointer(inner) => match inner.as_ref() {
            TypeExpr::Ident(name) if !name.is_empty() => Classified::Pointer(name),
            _ => Classified::Unrecognized,
        },
        TypeExpr::Ident(name) if !name.is_empty() => Classified::Value(name),
        _ => Classified::Unrecognized,
    }
}
