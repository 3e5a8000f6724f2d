// End-to-end checks of the bakery fixture: parse, walk, aggregate

use std::path::Path;

use pretty_assertions::assert_eq;
use recvcheck_core::config::CheckerConfig;
use recvcheck_core::source::NoGeneratedFiles;
use recvcheck_core::types::{FunctionDeclaration, ReceiverKind};
use recvcheck_enforce::engine::CheckEngine;
use recvcheck_enforce::types::{DeclRole, Violation};
use recvcheck_parsers::go::GoParser;

use crate::common::BAKERY;

fn bakery() -> Vec<FunctionDeclaration> {
    GoParser::new()
        .parse_file(Path::new("bakery/pancake.go"), BAKERY)
        .unwrap()
        .declarations
}

fn check(config: CheckerConfig) -> Vec<Violation> {
    let decls = bakery();
    CheckEngine::new(&config)
        .unwrap()
        .check_unit(&decls, &NoGeneratedFiles)
}

/// `(declaration, kind, role, line)` per finding of `type_name`.
fn rows(violations: &[Violation], type_name: &str) -> Vec<(String, ReceiverKind, DeclRole, u32)> {
    violations
        .iter()
        .find(|v| v.type_name == type_name)
        .map(|v| {
            v.findings
                .iter()
                .map(|f| (f.declaration.clone(), f.kind, f.role, f.line))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
/// Cake mixes unnamed pointer and value receivers.
fn test_cake() {
    let violations = check(CheckerConfig::default());
    assert_eq!(
        rows(&violations, "Cake"),
        vec![
            ("Fry".to_string(), ReceiverKind::Pointer, DeclRole::Method, 19),
            ("Bake".to_string(), ReceiverKind::Value, DeclRole::Method, 21),
        ]
    );
}

#[test]
/// The Pancake constructor only shows up once constructor checking is on.
fn test_pancake_constructor_toggle() {
    let off = check(CheckerConfig::default());
    assert_eq!(rows(&off, "Pancake").len(), 2);

    let mut config = CheckerConfig::default();
    config.constructor.enabled = true;
    let on = check(config);
    assert_eq!(
        rows(&on, "Pancake"),
        vec![
            ("Fry".to_string(), ReceiverKind::Pointer, DeclRole::Method, 12),
            ("NewPancake".to_string(), ReceiverKind::Value, DeclRole::Constructor, 10),
            ("Bake".to_string(), ReceiverKind::Value, DeclRole::Method, 14),
        ]
    );
}

#[test]
/// Types used one way only are never reported, constructors included.
fn test_consistent_types_never_reported() {
    let mut config = CheckerConfig::default();
    config.constructor.enabled = true;
    for violations in [check(CheckerConfig::default()), check(config)] {
        for name in ["Cookie", "Oven", "Teacup", "TeacupTwo"] {
            assert!(rows(&violations, name).is_empty(), "{name} reported");
        }
    }
}

#[test]
/// Interface hooks only count once the known-method table is switched off.
fn test_teacup_known_methods() {
    let config = CheckerConfig {
        skip_known_interface_methods: false,
        ..CheckerConfig::default()
    };
    let violations = check(config);
    let teacup = rows(&violations, "Teacup");
    assert_eq!(teacup.len(), 8);
    assert!(teacup[..7].iter().all(|r| r.1 == ReceiverKind::Pointer));
    assert_eq!(teacup[7].0, "Name");

    let two = rows(&violations, "TeacupTwo");
    assert_eq!(two[0].0, "Scan");
    assert_eq!(two[1].0, "Name");
}

#[test]
/// The same input and configuration always give the same report.
fn test_repeatable() {
    let mut config = CheckerConfig::default();
    config.constructor.enabled = true;
    config.skip_known_interface_methods = false;
    let first = serde_json::to_string(&check(config.clone())).unwrap();
    for _ in 0..3 {
        assert_eq!(serde_json::to_string(&check(config.clone())).unwrap(), first);
    }
}
