//! Go front end: turns a source file into [`FunctionDeclaration`]s.

pub mod type_expr;

use std::path::{Path, PathBuf};

use tree_sitter::Node;

use crate::treesitter::{node_text, ParseError, TreeSitterParser};
use recvcheck_core::types::{FunctionDeclaration, ReceiverBinding, SourcePosition, TypeExpr};
use type_expr::decode_type;

/// Declarations extracted from a single Go file.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub path: PathBuf,
    /// Name from the `package` clause, if the file has one.
    pub package: Option<String>,
    /// Every `func` declaration, in source order.
    pub declarations: Vec<FunctionDeclaration>,
}

/// Extracts function and method declarations from Go sources.
pub struct GoParser {
    parser: TreeSitterParser,
}

impl GoParser {
    pub fn new() -> Self {
        GoParser {
            parser: TreeSitterParser::new(),
        }
    }

    /// Parse one file. Syntax errors are recovered from, never reported:
    /// whatever tree-sitter salvages is decoded.
    pub fn parse_file(&mut self, path: &Path, source: &str) -> Result<ParsedFile, ParseError> {
        let bytes = source.as_bytes();
        let tree = self.parser.parse(bytes)?;
        let root = tree.root_node();

        let package = package_name(root, bytes);
        let mut declarations = Vec::new();
        collect_declarations(root, bytes, path, &mut declarations);

        Ok(ParsedFile {
            path: path.to_path_buf(),
            package,
            declarations,
        })
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

fn package_name(root: Node<'_>, source: &[u8]) -> Option<String> {
    let mut cursor = root.walk();
    let clause = root
        .named_children(&mut cursor)
        .find(|n| n.kind() == "package_clause")?;
    let mut clause_cursor = clause.walk();
    let ident = clause
        .named_children(&mut clause_cursor)
        .find(|n| n.kind() == "package_identifier")?;
    Some(node_text(ident, source).to_string())
}

/// Pre-order walk so that declarations buried inside ERROR nodes are still found.
/// Go forbids nested `func` declarations, so descending into bodies is harmless.
fn collect_declarations(
    root: Node<'_>,
    source: &[u8],
    path: &Path,
    out: &mut Vec<FunctionDeclaration>,
) {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        match node.kind() {
            "function_declaration" | "method_declaration" => {
                out.push(decode_declaration(node, source, path));
            }
            _ => {
                if cursor.goto_first_child() {
                    continue;
                }
            }
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

fn decode_declaration(node: Node<'_>, source: &[u8], path: &Path) -> FunctionDeclaration {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .filter(|n| !n.is_empty());

    let receivers = if node.kind() == "method_declaration" {
        let mut bindings = node
            .child_by_field_name("receiver")
            .map(|list| decode_receivers(list, source))
            .unwrap_or_default();
        // Keep the declaration a method even when the receiver list is unreadable.
        if bindings.is_empty() {
            bindings.push(ReceiverBinding {
                name: None,
                type_expr: None,
            });
        }
        bindings
    } else {
        Vec::new()
    };

    let results = node
        .child_by_field_name("result")
        .map(|r| decode_results(r, source))
        .unwrap_or_default();

    let start = node.start_position();
    FunctionDeclaration {
        name,
        receivers,
        results,
        position: SourcePosition {
            file: path.to_path_buf(),
            line: start.row as u32 + 1,
            column: start.column as u32 + 1,
        },
    }
}

fn is_parameter(node: Node<'_>) -> bool {
    matches!(
        node.kind(),
        "parameter_declaration" | "variadic_parameter_declaration"
    )
}

/// One binding per receiver name; `func (a, b T)` is invalid Go but tolerated.
fn decode_receivers(list: Node<'_>, source: &[u8]) -> Vec<ReceiverBinding> {
    let mut bindings = Vec::new();
    let mut cursor = list.walk();
    for param in list.named_children(&mut cursor).filter(|n| is_parameter(*n)) {
        let type_expr = param
            .child_by_field_name("type")
            .filter(|t| !t.is_missing())
            .map(|t| decode_type(t, source));
        let mut name_cursor = param.walk();
        let names: Vec<String> = param
            .children_by_field_name("name", &mut name_cursor)
            .map(|n| node_text(n, source).to_string())
            .collect();
        if names.is_empty() {
            bindings.push(ReceiverBinding {
                name: None,
                type_expr,
            });
        } else {
            for name in names {
                bindings.push(ReceiverBinding {
                    name: Some(name),
                    type_expr: type_expr.clone(),
                });
            }
        }
    }
    bindings
}

/// One entry per result declaration: `(a, b int, err error)` yields `int`, `error`.
fn decode_results(result: Node<'_>, source: &[u8]) -> Vec<TypeExpr> {
    if result.kind() != "parameter_list" {
        return vec![decode_type(result, source)];
    }
    let mut cursor = result.walk();
    let results = result
        .named_children(&mut cursor)
        .filter(|n| is_parameter(*n))
        .filter_map(|param| param.child_by_field_name("type"))
        .map(|t| decode_type(t, source))
        .collect();
    results
}
