//! Grouping of parsed files into Go packages (compilation units).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::go::{GoParser, ParsedFile};
use recvcheck_core::types::FunctionDeclaration;

/// All files of one Go package in one directory.
///
/// `package foo` and `package foo_test` in the same directory are distinct
/// packages, as they are for the Go toolchain.
#[derive(Debug, Clone)]
pub struct Package {
    pub dir: PathBuf,
    pub name: String,
    /// Ordered by file name.
    pub files: Vec<ParsedFile>,
}

impl Package {
    /// Declarations of every file, file by file, each in source order.
    pub fn declarations(&self) -> impl Iterator<Item = &FunctionDeclaration> {
        self.files.iter().flat_map(|f| f.declarations.iter())
    }

    pub fn declaration_count(&self) -> usize {
        self.files.iter().map(|f| f.declarations.len()).sum()
    }
}

/// Read and parse `paths` in parallel, then group the results by
/// `(directory, package name)`. Unreadable or unparsable files are logged
/// and left out.
pub fn load_packages(paths: &[PathBuf]) -> Vec<Package> {
    let parsed: Vec<ParsedFile> = paths
        .par_iter()
        .map_init(GoParser::new, |parser, path| parse_one(parser, path))
        .filter_map(|r| r)
        .collect();
    group_into_packages(parsed)
}

fn parse_one(parser: &mut GoParser, path: &Path) -> Option<ParsedFile> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
            return None;
        }
    };
    match parser.parse_file(path, &content) {
        Ok(file) => Some(file),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to parse");
            None
        }
    }
}

/// Packages come out ordered by directory then package name; files inside a
/// package by path. The input order does not matter.
pub fn group_into_packages(files: Vec<ParsedFile>) -> Vec<Package> {
    let mut groups: BTreeMap<(PathBuf, String), Vec<ParsedFile>> = BTreeMap::new();
    for file in files {
        let dir = file
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let name = file.package.clone().unwrap_or_default();
        groups.entry((dir, name)).or_default().push(file);
    }

    groups
        .into_iter()
        .map(|((dir, name), mut files)| {
            files.sort_by(|a, b| a.path.cmp(&b.path));
            Package { dir, name, files }
        })
        .collect()
}
