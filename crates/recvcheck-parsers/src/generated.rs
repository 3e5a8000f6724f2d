//! Generated-file detection following the Go convention
//! (<https://go.dev/s/generatedcode>).

use std::io;
use std::path::Path;

use recvcheck_core::source::GeneratedFileDetector;

const MARKER_PREFIX: &str = "// Code generated ";
const MARKER_SUFFIX: &str = " DO NOT EDIT.";

/// True when a `// Code generated ... DO NOT EDIT.` line comment appears
/// before the `package` clause.
pub fn is_generated_source(source: &str) -> bool {
    let mut in_block_comment = false;
    for line in source.lines() {
        let trimmed = line.trim_start();
        if in_block_comment {
            if trimmed.contains("*/") {
                in_block_comment = false;
            }
            continue;
        }
        if trimmed.starts_with("/*") {
            in_block_comment = !trimmed[2..].contains("*/");
            continue;
        }
        if trimmed.starts_with("package ") || trimmed == "package" {
            return false;
        }
        if is_marker(trimmed) {
            return true;
        }
    }
    false
}

fn is_marker(line: &str) -> bool {
    line.strip_prefix(MARKER_PREFIX)
        .is_some_and(|rest| rest.ends_with(MARKER_SUFFIX))
}

/// Re-reads files from disk to answer [`GeneratedFileDetector::is_generated`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FsGeneratedDetector;

impl GeneratedFileDetector for FsGeneratedDetector {
    fn is_generated(&self, path: &Path) -> io::Result<bool> {
        let content = std::fs::read_to_string(path)?;
        Ok(is_generated_source(&content))
    }
}
