use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::treesitter::{is_go_source, is_go_test_file};

pub const IGNORE_FILE_NAME: &str = ".recvcheckignore";

#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("invalid ignore pattern `{pattern}`: {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// Finds Go sources beneath a root, honouring `.gitignore`, `.recvcheckignore`
/// and configured glob patterns.
pub struct SourceWalker {
    root: PathBuf,
    ignore: GlobSet,
    include_tests: bool,
}

impl SourceWalker {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            ignore: GlobSet::empty(),
            include_tests: true,
        }
    }

    /// Patterns are matched against paths relative to the walk root.
    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Result<Self, WalkError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|source| WalkError::InvalidIgnorePattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        self.ignore = builder
            .build()
            .map_err(|source| WalkError::InvalidIgnorePattern {
                pattern: patterns.join(", "),
                source,
            })?;
        Ok(self)
    }

    pub fn include_tests(mut self, include: bool) -> Self {
        self.include_tests = include;
        self
    }

    /// Sorted list of Go files to check. A root that is itself a file is
    /// returned as-is when it is a Go source.
    pub fn walk(&self) -> Vec<PathBuf> {
        if self.root.is_file() {
            return if is_go_source(&self.root) {
                vec![self.root.clone()]
            } else {
                vec![]
            };
        }

        let mut entries = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .add_custom_ignore_filename(IGNORE_FILE_NAME)
            .build();

        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.into_path();
            if !is_go_source(&path) {
                continue;
            }
            if !self.include_tests && is_go_test_file(&path) {
                continue;
            }
            let relative = path.strip_prefix(&self.root).unwrap_or(&path);
            if self.ignore.is_match(relative) {
                tracing::debug!(path = %path.display(), "ignored by pattern");
                continue;
            }
            entries.push(path);
        }

        entries.sort();
        entries
    }
}
