//! Decoding of tree-sitter-go type nodes into [`TypeExpr`].

use tree_sitter::Node;

use crate::treesitter::node_text;
use recvcheck_core::types::TypeExpr;

/// Decode a type node. Shapes that the checker never inspects collapse to
/// [`TypeExpr::Other`] carrying the raw source text.
pub fn decode_type(node: Node<'_>, source: &[u8]) -> TypeExpr {
    match node.kind() {
        "type_identifier" => TypeExpr::Ident(node_text(node, source).to_string()),
        "pointer_type" => match first_named_child(node) {
            Some(inner) => TypeExpr::Pointer(Box::new(decode_type(inner, source))),
            None => other(node, source),
        },
        "parenthesized_type" => match first_named_child(node) {
            Some(inner) => TypeExpr::Paren(Box::new(decode_type(inner, source))),
            None => other(node, source),
        },
        "qualified_type" => {
            let package = node.child_by_field_name("package");
            let name = node.child_by_field_name("name");
            match (package, name) {
                (Some(p), Some(n)) => TypeExpr::Qualified {
                    package: node_text(p, source).to_string(),
                    name: node_text(n, source).to_string(),
                },
                _ => other(node, source),
            }
        }
        "generic_type" => {
            let Some(base) = node.child_by_field_name("type") else {
                return other(node, source);
            };
            let args = node
                .child_by_field_name("type_arguments")
                .map(|list| decode_type_arguments(list, source))
                .unwrap_or_default();
            TypeExpr::Generic {
                base: Box::new(decode_type(base, source)),
                args,
            }
        }
        _ => other(node, source),
    }
}

fn decode_type_arguments(list: Node<'_>, source: &[u8]) -> Vec<TypeExpr> {
    let mut cursor = list.walk();
    list.named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .map(|arg| {
            // Newer grammars wrap each argument in a `type_elem` (`A | B` unions).
            if arg.kind() == "type_elem" && arg.named_child_count() == 1 {
                match first_named_child(arg) {
                    Some(inner) => decode_type(inner, source),
                    None => other(arg, source),
                }
            } else {
                decode_type(arg, source)
            }
        })
        .collect()
}

fn first_named_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let child = node
        .named_children(&mut cursor)
        .find(|n| n.kind() != "comment");
    child
}

fn other(node: Node<'_>, source: &[u8]) -> TypeExpr {
    TypeExpr::Other(node_text(node, source).to_string())
}
