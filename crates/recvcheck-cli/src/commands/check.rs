use std::path::{Path, PathBuf};

use recvcheck_core::config::CheckerConfig;
use recvcheck_enforce::engine::CheckEngine;
use recvcheck_enforce::types::CheckResult;
use recvcheck_output::OutputFormatter;
use recvcheck_parsers::generated::FsGeneratedDetector;
use recvcheck_parsers::package::load_packages;
use recvcheck_parsers::walker::SourceWalker;

use crate::cli_args::ConfigOverrides;

/// Run `recvcheck check [PATHS]`: report types with mixed receiver kinds.
///
/// Exit codes: 0 clean, 1 findings, 2 configuration or I/O error.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    paths: Vec<PathBuf>,
    overrides: &ConfigOverrides,
) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("recvcheck check: failed to get current directory: {}", e);
            return 2;
        }
    };

    let mut config = CheckerConfig::load(&cwd);
    overrides.apply(&mut config);

    // Patterns are validated before any file is read.
    let engine = match CheckEngine::new(&config) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("recvcheck check: {}", e);
            return 2;
        }
    };

    let roots = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };
    let files = match collect_files(&cwd, &roots, &config) {
        Ok(f) => f,
        Err(msg) => {
            eprintln!("recvcheck check: {}", msg);
            return 2;
        }
    };
    if verbose {
        eprintln!("recvcheck check: checking {} file(s)", files.len());
    }

    let packages = load_packages(&files);
    let result = engine.check_packages(&packages, &FsGeneratedDetector);
    output_result(formatter, &result, verbose)
}

fn collect_files(cwd: &Path, roots: &[PathBuf], config: &CheckerConfig) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    for root in roots {
        if !root.exists() {
            return Err(format!("{}: no such file or directory", root.display()));
        }
        let walker = SourceWalker::new(root)
            .with_ignore_patterns(&config.ignore_patterns)
            .map_err(|e| e.to_string())?
            .include_tests(config.include_tests);
        files.extend(walker.walk().into_iter().map(|p| make_relative(cwd, &p)));
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn output_result(formatter: &dyn OutputFormatter, result: &CheckResult, verbose: bool) -> i32 {
    let output = formatter.format_check(result);
    if !output.is_empty() {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }

    if result.is_clean() {
        if verbose {
            eprintln!(
                "recvcheck check: clean, {} type(s) in {} package(s)",
                result.summary.types_checked, result.summary.packages
            );
        }
        0
    } else {
        1
    }
}

/// Paths under the working directory are reported relative to it.
fn make_relative(cwd: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(cwd)
        .or_else(|_| path.strip_prefix("."))
        .unwrap_or(path)
        .to_path_buf()
}
