//! Terminal-value policy for the Python grammar.
//!
//! A node kind listed here may carry a value; any other kind is structural.
//! Adding a literal kind means adding one row, the builder and the path
//! generator never look at kinds themselves.

use std::collections::HashMap;
use std::sync::LazyLock;
use tree_sitter::Node;

/// Returns the terminal value of `node`, or `None` to keep it structural.
pub type ValueExtractor = fn(Node<'_>, &[u8]) -> Option<String>;

static TERMINAL_POLICY: LazyLock<HashMap<&'static str, ValueExtractor>> = LazyLock::new(|| {
    let table: [(&'static str, ValueExtractor); 10] = [
        ("identifier", identifier_value),
        ("integer", literal_text),
        ("float", literal_text),
        ("string", string_value),
        ("string_content", literal_text),
        ("concatenated_string", concatenated_string_value),
        ("true", literal_text),
        ("false", literal_text),
        ("none", literal_text),
        ("ellipsis", ellipsis_value),
    ];
    table.into_iter().collect()
});

/// Look up and run the extractor registered for `node.kind()`.
pub fn terminal_value(node: Node<'_>, code: &[u8]) -> Option<String> {
    let extract = TERMINAL_POLICY.get(node.kind())?;
    extract(node, code).filter(|v| !v.is_empty())
}

fn literal_text(node: Node<'_>, code: &[u8]) -> Option<String> {
    node.utf8_text(code).ok().map(str::to_string)
}

fn ellipsis_value(_node: Node<'_>, _code: &[u8]) -> Option<String> {
    Some("Ellipsis".to_string())
}

/// Identifiers are terminals where they name a value. Labels that are only
/// spelled out stay structural: definition names, attribute and keyword
/// names, imported module paths and aliases, `global`/`nonlocal` lists.
fn identifier_value(node: Node<'_>, code: &[u8]) -> Option<String> {
    if is_label(node) {
        return None;
    }
    literal_text(node, code)
}

fn is_label(node: Node<'_>) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    match parent.kind() {
        "function_definition" | "class_definition" | "keyword_argument" => {
            parent.child_by_field_name("name") == Some(node)
        }
        "attribute" => parent.child_by_field_name("attribute") == Some(node),
        "global_statement" | "nonlocal_statement" => true,
        "dotted_name" | "aliased_import" => inside_import(parent),
        _ => false,
    }
}

/// `dotted_name` also shows up in match patterns, where it is a real name.
fn inside_import(mut node: Node<'_>) -> bool {
    while let Some(parent) = node.parent() {
        match parent.kind() {
            "import_statement" | "import_from_statement" | "future_import_statement" => {
                return true;
            }
            "dotted_name" | "aliased_import" | "relative_import" => node = parent,
            _ => return false,
        }
    }
    false
}

/// Plain strings yield their unquoted content. Interpolated strings stay
/// structural so their pieces and embedded expressions are visited.
fn string_value(node: Node<'_>, code: &[u8]) -> Option<String> {
    let mut out = String::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "interpolation" => return None,
            "string_content" => out.push_str(child.utf8_text(code).ok()?),
            _ => {}
        }
    }
    Some(out)
}

/// `"a" "b"` is one literal `ab`.
fn concatenated_string_value(node: Node<'_>, code: &[u8]) -> Option<String> {
    let mut out = String::new();
    let mut cursor = node.walk();
    for part in node.named_children(&mut cursor) {
        if part.kind() == "string" {
            out.push_str(&string_value(part, code)?);
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::{Parser, Tree};

    fn parse(code: &str) -> Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .unwrap();
        parser.parse(code, None).unwrap()
    }

    /// Values of every `identifier` in source order.
    fn identifier_values(code: &str) -> Vec<Option<String>> {
        let tree = parse(code);
        let mut out = Vec::new();
        let mut stack = vec![tree.root_node()];
        while let Some(node) = stack.pop() {
            if node.kind() == "identifier" {
                out.push(terminal_value(node, code.as_bytes()));
            }
            let mut cursor = node.walk();
            let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
            stack.extend(children.into_iter().rev());
        }
        out
    }

    fn some(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn attribute_name_is_structural() {
        assert_eq!(identifier_values("obj.attr = 1"), vec![some("obj"), None]);
    }

    #[test]
    fn keyword_name_is_structural() {
        assert_eq!(identifier_values("f(key=v)"), vec![some("f"), None, some("v")]);
    }

    #[test]
    fn import_names_are_structural() {
        assert!(identifier_values("import os.path as p").iter().all(Option::is_none));
        assert!(identifier_values("from pkg.mod import a, b as c").iter().all(Option::is_none));
    }

    #[test]
    fn global_names_are_structural() {
        assert_eq!(identifier_values("global counter"), vec![None]);
    }

    #[test]
    fn parameters_stay_terminals() {
        assert_eq!(
            identifier_values("def f(a, b): pass"),
            vec![None, some("a"), some("b")]
        );
    }
}
