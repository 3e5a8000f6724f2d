//! Per-type record of which declarations used which receiver kind.

use std::collections::HashMap;

use crate::types::DeclRole;
use recvcheck_core::types::{FunctionDeclaration, ReceiverKind};

/// A declaration observed using a type, and in which role.
#[derive(Debug, Clone, Copy)]
pub struct Usage<'d> {
    pub decl: &'d FunctionDeclaration,
    pub role: DeclRole,
}

impl<'d> Usage<'d> {
    pub fn method(decl: &'d FunctionDeclaration) -> Self {
        Self {
            decl,
            role: DeclRole::Method,
        }
    }

    pub fn constructor(decl: &'d FunctionDeclaration) -> Self {
        Self {
            decl,
            role: DeclRole::Constructor,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypeEntry<'d> {
    pub type_name: String,
    pub pointer_users: Vec<Usage<'d>>,
    pub value_users: Vec<Usage<'d>>,
}

impl TypeEntry<'_> {
    /// Both receiver kinds were observed.
    pub fn is_mixed(&self) -> bool {
        !self.pointer_users.is_empty() && !self.value_users.is_empty()
    }
}

/// Insertion-ordered map from type name to its [`TypeEntry`].
///
/// Types iterate in the order they were first observed, and each entry's
/// sequences in the order usages were recorded. One registry per
/// compilation unit; it is not meant to be shared between walks.
#[derive(Debug, Default)]
pub struct TypeRegistry<'d> {
    entries: Vec<TypeEntry<'d>>,
    index: HashMap<String, usize>,
}

impl<'d> TypeRegistry<'d> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, type_name: &str, kind: ReceiverKind, usage: Usage<'d>) {
        let entry = self.entry_mut(type_name);
        match kind {
            ReceiverKind::Pointer => entry.pointer_users.push(usage),
            ReceiverKind::Value => entry.value_users.push(usage),
        }
    }

    fn entry_mut(&mut self, type_name: &str) -> &mut TypeEntry<'d> {
        let idx = match self.index.get(type_name) {
            Some(&idx) => idx,
            None => {
                self.entries.push(TypeEntry {
                    type_name: type_name.to_string(),
                    pointer_users: Vec::new(),
                    value_users: Vec::new(),
                });
                let idx = self.entries.len() - 1;
                self.index.insert(type_name.to_string(), idx);
                idx
            }
        };
        &mut self.entries[idx]
    }

    pub fn get(&self, type_name: &str) -> Option<&TypeEntry<'d>> {
        self.index.get(type_name).map(|&idx| &self.entries[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeEntry<'d>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
