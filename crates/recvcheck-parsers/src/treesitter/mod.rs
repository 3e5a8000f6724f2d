use std::path::Path;

use tree_sitter::{Language, Node, Parser, Tree};

/// Thin wrapper over a tree-sitter parser bound to the Go grammar.
pub struct TreeSitterParser {
    parser: Parser,
    language: Language,
}

impl TreeSitterParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
            language: tree_sitter_go::LANGUAGE.into(),
        }
    }

    pub fn parse(&mut self, source: &[u8]) -> Result<Tree, ParseError> {
        self.parser
            .set_language(&self.language)
            .map_err(|e| ParseError::Language(format!("{e}")))?;
        self.parser.parse(source, None).ok_or(ParseError::ParseFailed)
    }
}

impl Default for TreeSitterParser {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("language error: {0}")]
    Language(String),
    #[error("parse failed")]
    ParseFailed,
}

pub(crate) fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// Whether `path` names a Go source file.
pub fn is_go_source(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("go")
}

/// Go's `_test.go` naming convention.
pub fn is_go_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with("_test.go"))
}
