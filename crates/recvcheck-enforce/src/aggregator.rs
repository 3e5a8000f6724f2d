//! Turns a finished [`TypeRegistry`] into violations.

use crate::registry::{TypeEntry, TypeRegistry, Usage};
use crate::types::{Finding, Violation};
use recvcheck_core::types::ReceiverKind;

/// One violation per type that has both pointer and value users, in the
/// order types were first observed. Consistent types produce nothing.
pub fn aggregate(registry: &TypeRegistry<'_>) -> Vec<Violation> {
    registry
        .iter()
        .filter(|entry| entry.is_mixed())
        .map(violation_for)
        .collect()
}

fn violation_for(entry: &TypeEntry<'_>) -> Violation {
    let pointer = entry
        .pointer_users
        .iter()
        .map(|u| finding(&entry.type_name, ReceiverKind::Pointer, u));
    let value = entry
        .value_users
        .iter()
        .map(|u| finding(&entry.type_name, ReceiverKind::Value, u));
    Violation {
        type_name: entry.type_name.clone(),
        findings: pointer.chain(value).collect(),
    }
}

fn finding(type_name: &str, kind: ReceiverKind, usage: &Usage<'_>) -> Finding {
    let decl = usage.decl;
    let name = decl.name_or_placeholder();
    Finding {
        type_name: type_name.to_string(),
        declaration: name.to_string(),
        role: usage.role,
        kind,
        file: decl.position.file.to_string_lossy().to_string(),
        line: decl.position.line,
        column: decl.position.column,
        message: format!("{type_name}.{name} uses {kind}"),
    }
}
