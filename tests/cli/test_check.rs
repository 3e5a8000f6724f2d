// Tests for `recvcheck check`: receiver consistency over a project tree

use crate::common::{run_recvcheck, write_project, BAKERY};

const MIXED: &str = "package shop\n\ntype Till struct{}\n\nfunc (t *Till) Open() {}\n\nfunc (t Till) Total() int { return 0 }\n";
const CONSISTENT: &str = "package shop\n\ntype Till struct{}\n\nfunc (t *Till) Open() {}\n\nfunc (t *Till) Total() int { return 0 }\n";

fn stdout(out: &std::process::Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

#[test]
fn test_check_bakery_human_output() {
    let dir = write_project(&[("bakery/pancake.go", BAKERY)]);
    let out = run_recvcheck(dir.path(), &["check"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        stdout(&out),
        "bakery/pancake.go:12:1: Pancake.Fry uses pointer\n\
         bakery/pancake.go:14:1: Pancake.Bake uses value\n\
         bakery/pancake.go:19:1: Cake.Fry uses pointer\n\
         bakery/pancake.go:21:1: Cake.Bake uses value\n\
         \n4 finding(s) on 2 type(s) in 1 file(s)\n"
    );
}

#[test]
fn test_check_bakery_with_constructors() {
    let dir = write_project(&[("bakery/pancake.go", BAKERY)]);
    let out = run_recvcheck(dir.path(), &["check", "--constructors"]);
    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert!(text.contains("bakery/pancake.go:10:1: Pancake.NewPancake uses value"));
    assert!(text.contains("Brownie.NewBrownie uses value"));
    assert!(text.contains("BadCookie.NewBadCookie uses pointer"));
    assert!(!text.contains("Oven"));
    assert!(!text.contains("Cookie.NewCookie"));
    assert!(text.contains("9 finding(s) on 4 type(s) in 1 file(s)"));
}

#[test]
fn test_check_bakery_json() {
    let dir = write_project(&[("bakery/pancake.go", BAKERY)]);
    let out = run_recvcheck(dir.path(), &["check", "--json", "--no-skip-known"]);
    assert_eq!(out.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["command"], "check");
    assert_eq!(json["status"], "violations");
    assert_eq!(json["summary"]["packages"], 1);
    assert_eq!(json["summary"]["types_with_violations"], 4);
    let types: Vec<&str> = json["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["type_name"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["Pancake", "Cake", "Teacup", "TeacupTwo"]);
    let first = &json["violations"][0]["findings"][0];
    assert_eq!(first["file"], "bakery/pancake.go");
    assert_eq!(first["kind"], "pointer");
    assert_eq!(first["role"], "method");
}

#[test]
fn test_check_clean_project_prints_nothing() {
    let dir = write_project(&[("shop/till.go", CONSISTENT)]);
    let out = run_recvcheck(dir.path(), &["check"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty(), "clean check must produce empty stdout");
}

#[test]
fn test_check_clean_project_json() {
    let dir = write_project(&[("shop/till.go", CONSISTENT)]);
    let out = run_recvcheck(dir.path(), &["check", "--json"]);
    assert_eq!(out.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["summary"]["findings"], 0);
    assert_eq!(json["summary"]["types_checked"], 1);
}

#[test]
fn test_check_explicit_paths() {
    let dir = write_project(&[("clean/till.go", CONSISTENT), ("mixed/till.go", MIXED)]);
    let out = run_recvcheck(dir.path(), &["check", "clean"]);
    assert_eq!(out.status.code(), Some(0));
    let out = run_recvcheck(dir.path(), &["check", "clean", "mixed/till.go"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("mixed/till.go:5:1: Till.Open uses pointer\n"));
}

#[test]
fn test_check_packages_do_not_share_types() {
    let a = "package a\n\ntype Till struct{}\n\nfunc (t *Till) Open() {}\n";
    let b = "package b\n\ntype Till struct{}\n\nfunc (t Till) Total() int { return 0 }\n";
    let dir = write_project(&[("a/till.go", a), ("b/till.go", b)]);
    let out = run_recvcheck(dir.path(), &["check"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_check_skips_generated_files() {
    let generated = format!("// Code generated by stringer. DO NOT EDIT.\n\n{}", MIXED);
    let dir = write_project(&[("shop/till_string.go", &generated)]);
    let out = run_recvcheck(dir.path(), &["check"]);
    assert_eq!(out.status.code(), Some(0));

    let out = run_recvcheck(dir.path(), &["check", "--include-generated"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_check_exclude_tests() {
    let test_file = "package shop\n\ntype fakeTill struct{}\n\nfunc (f *fakeTill) Open() {}\n\nfunc (f fakeTill) Close() {}\n";
    let dir = write_project(&[("shop/till.go", CONSISTENT), ("shop/till_test.go", test_file)]);
    let out = run_recvcheck(dir.path(), &["check"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("shop/till_test.go:5:1: fakeTill.Open uses pointer"));

    let out = run_recvcheck(dir.path(), &["check", "--exclude-tests"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_check_skip_method_and_pattern() {
    let dir = write_project(&[("shop/till.go", MIXED)]);
    let out = run_recvcheck(dir.path(), &["check", "--skip-method", "Open"]);
    assert_eq!(out.status.code(), Some(0));
    let out = run_recvcheck(dir.path(), &["check", "--skip-pattern", "^Tot"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_check_reads_config_file() {
    let config = r#"{ "constructor": { "enabled": true }, "ignore_patterns": ["vendor/**"] }"#;
    let dir = write_project(&[
        (".recvcheck.json", config),
        ("bakery/pancake.go", BAKERY),
        ("vendor/shop/till.go", MIXED),
    ]);
    let out = run_recvcheck(dir.path(), &["check"]);
    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert!(text.contains("Pancake.NewPancake uses value"));
    assert!(!text.contains("vendor/"));
}

#[test]
fn test_check_honours_recvcheckignore() {
    let dir = write_project(&[
        (".recvcheckignore", "legacy/\n"),
        ("legacy/till.go", MIXED),
        ("shop/till.go", CONSISTENT),
    ]);
    let out = run_recvcheck(dir.path(), &["check"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_check_constructor_pattern_flag() {
    let source = "package shop\n\ntype Till struct{}\n\nfunc makeTill() *Till { return nil }\n\nfunc (t Till) Total() int { return 0 }\n";
    let dir = write_project(&[("shop/till.go", source)]);
    let out = run_recvcheck(
        dir.path(),
        &["check", "--constructors", "--constructor-pattern", "^make(?P<Type>.+)$"],
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("shop/till.go:5:1: Till.makeTill uses pointer"));
}
