/// Shared test helpers for all recvcheck integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// The canonical bakery package, with types covering every receiver rule.
#[allow(dead_code)]
pub const BAKERY: &str = include_str!("../fixtures/bakery/pancake.go");

/// Lay out `(relative_path, content)` pairs under a fresh temp directory.
///
/// Hold the TempDir to keep the directory alive.
#[allow(dead_code)]
pub fn write_project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (path, content) in files {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
    }
    dir
}

/// Get path to compiled recvcheck binary.
///
/// Builds the binary if it doesn't exist yet.
#[allow(dead_code)]
pub fn recvcheck_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove 'deps'
    path.push("recvcheck");
    if !path.exists() {
        let status = Command::new("cargo")
            .args(["build", "-p", "recvcheck-cli"])
            .status()
            .expect("Failed to build recvcheck");
        assert!(status.success(), "Failed to build recvcheck binary");
    }
    path
}

/// Run the binary in `dir` with `args`, logging disabled.
#[allow(dead_code)]
pub fn run_recvcheck(dir: &Path, args: &[&str]) -> Output {
    Command::new(recvcheck_bin())
        .args(args)
        .current_dir(dir)
        .env("RECVCHECK_LOG", "off")
        .output()
        .unwrap()
}
