// Multi-package checks from disk with the filesystem generated-file detector

use recvcheck_core::config::CheckerConfig;
use recvcheck_enforce::engine::CheckEngine;
use recvcheck_parsers::generated::FsGeneratedDetector;
use recvcheck_parsers::package::load_packages;
use recvcheck_parsers::walker::SourceWalker;

use crate::common::{write_project, BAKERY};

const GENERATED_MIXED: &str = "// Code generated by mockgen. DO NOT EDIT.\n\npackage mocks\n\ntype Store struct{}\n\nfunc (s *Store) Get() {}\n\nfunc (s Store) Put() {}\n";

#[test]
fn test_check_project_from_disk() {
    let dir = write_project(&[
        ("bakery/pancake.go", BAKERY),
        ("mocks/store.go", GENERATED_MIXED),
        ("shop/till.go", "package shop\n\ntype Till struct{}\n\nfunc (t *Till) Open() {}\n"),
    ]);
    let files = SourceWalker::new(dir.path()).walk();
    let packages = load_packages(&files);
    let engine = CheckEngine::new(&CheckerConfig::default()).unwrap();
    let result = engine.check_packages(&packages, &FsGeneratedDetector);

    assert_eq!(result.summary.packages, 3);
    assert_eq!(result.summary.files_analyzed, 3);
    assert_eq!(result.summary.types_with_violations, 2);
    let types: Vec<&str> = result.violations.iter().map(|v| v.type_name.as_str()).collect();
    assert_eq!(types, vec!["Pancake", "Cake"]);
}

#[test]
fn test_generated_package_checked_when_asked() {
    let dir = write_project(&[("mocks/store.go", GENERATED_MIXED)]);
    let files = SourceWalker::new(dir.path()).walk();
    let packages = load_packages(&files);
    let config = CheckerConfig {
        skip_generated: false,
        ..CheckerConfig::default()
    };
    let result = CheckEngine::new(&config)
        .unwrap()
        .check_packages(&packages, &FsGeneratedDetector);
    let messages: Vec<&str> = result.findings().map(|f| f.message.as_str()).collect();
    assert_eq!(messages, vec!["Store.Get uses pointer", "Store.Put uses value"]);
    assert_eq!(result.status, "violations");
}

#[test]
/// A file that disappears between parsing and detection is still checked.
fn test_vanished_file_fails_open() {
    let dir = write_project(&[(
        "shop/till.go",
        "package shop\n\ntype Till struct{}\n\nfunc (t *Till) Open() {}\n\nfunc (t Till) Total() int { return 0 }\n",
    )]);
    let files = SourceWalker::new(dir.path()).walk();
    let packages = load_packages(&files);
    std::fs::remove_file(dir.path().join("shop/till.go")).unwrap();

    let result = CheckEngine::new(&CheckerConfig::default())
        .unwrap()
        .check_packages(&packages, &FsGeneratedDetector);
    assert_eq!(result.summary.findings, 2);
}
