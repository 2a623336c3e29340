//! Python parsing with the function-body fallback.
//!
//! A snippet is first parsed as a module. If that fails (including layout
//! the grammar tolerates but Python does not) it is parsed once
//! more as the body of `def wrapper():`, which accepts fragments lifted out
//! of a function (indented statements). The snippet text is kept verbatim.

use tree_sitter::{Node, Parser, Tree};

use crate::errors::{Error, ParseError, Result};

/// Header placed in front of a snippet for the second attempt.
pub const WRAPPER_HEADER: &str = "def wrapper():\n";

/// Longest offending text quoted in a diagnostic.
const MAX_QUOTED: usize = 32;

/// A successfully parsed snippet together with the exact text that was parsed.
#[derive(Debug)]
pub struct ParsedSnippet {
    pub tree: Tree,
    pub code: String,
    /// True when the fallback wrapper was needed.
    pub wrapped: bool,
}

/// Fresh parser with the Python grammar loaded.
pub fn python_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_python::LANGUAGE.into())?;
    Ok(parser)
}

/// Parse `source`, falling back to the wrapped form. When both fail the
/// diagnostic of the first attempt is returned, so positions refer to the
/// caller's text.
pub fn parse_snippet(source: &str) -> Result<ParsedSnippet> {
    let mut parser = python_parser()?;
    let (tree, code, wrapped) =
        parse_with_fallback(source, |code| parse_module(&mut parser, code))?;
    Ok(ParsedSnippet {
        tree,
        code,
        wrapped,
    })
}

/// Two-attempt policy shared by [`parse_snippet`]; only syntax errors trigger
/// the retry, parser failures propagate immediately.
pub(crate) fn parse_with_fallback<T>(
    source: &str,
    mut attempt: impl FnMut(&str) -> Result<T>,
) -> Result<(T, String, bool)> {
    let first = match attempt(source) {
        Ok(parsed) => return Ok((parsed, source.to_string(), false)),
        Err(Error::Parse(diag)) => diag,
        Err(other) => return Err(other),
    };

    let wrapped = wrap_snippet(source);
    match attempt(&wrapped) {
        Ok(parsed) => Ok((parsed, wrapped, true)),
        Err(Error::Parse(_)) => Err(Error::Parse(first)),
        Err(other) => Err(other),
    }
}

pub fn wrap_snippet(source: &str) -> String {
    format!("{WRAPPER_HEADER}{source}")
}

/// Parse `code` as a module. ERROR and MISSING nodes are syntax errors, and
/// so is anything [`check_layout`] rejects.
fn parse_module(parser: &mut Parser, code: &str) -> Result<Tree> {
    let tree = parser.parse(code, None).ok_or(Error::ParserAborted)?;
    let root = tree.root_node();
    if root.has_error() {
        return Err(Error::Parse(diagnose(root, code)));
    }
    check_layout(root)?;
    Ok(tree)
}

/// Statements only Python 2 accepts. The grammar still parses them cleanly.
const PYTHON2_STATEMENTS: [&str; 2] = ["print_statement", "exec_statement"];

/// Input the grammar recovers from without an ERROR node but Python refuses:
/// Python 2 statements, blocks with no statements, and statements that do
/// not line up with their siblings (top-level ones must start at column 0).
fn check_layout(root: Node<'_>) -> std::result::Result<(), ParseError> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        match node.kind() {
            kind if PYTHON2_STATEMENTS.contains(&kind) => {
                let keyword = kind.trim_end_matches("_statement");
                return Err(at(node, format!("`{keyword}` statement is Python 2 syntax")));
            }
            "module" => check_columns(node, Some(0))?,
            "block" => {
                if node.start_byte() == node.end_byte() || statements(node).is_empty() {
                    return Err(at(node, "expected an indented block".to_string()));
                }
                check_columns(node, None)?;
            }
            _ => {}
        }

        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
    Ok(())
}

/// Named, non-extra children of a `module` or `block`.
fn statements(parent: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = parent.walk();
    parent
        .named_children(&mut cursor)
        .filter(|c| !c.is_extra())
        .collect()
}

/// Every statement that opens a line must start at `expected`, or at the
/// column of the first one when `expected` is `None`. Statements after a `;`
/// share their line and are not checked.
fn check_columns(parent: Node<'_>, expected: Option<usize>) -> std::result::Result<(), ParseError> {
    let mut column = expected;
    for stmt in statements(parent) {
        if stmt.prev_sibling().is_some_and(|p| p.kind() == ";") {
            continue;
        }
        let start = stmt.start_position().column;
        match column {
            None => column = Some(start),
            Some(c) if start > c => return Err(at(stmt, "unexpected indent".to_string())),
            Some(c) if start < c => {
                return Err(at(
                    stmt,
                    "unindent does not match any outer indentation level".to_string(),
                ));
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Describe the first (pre-order) error node below `root`.
fn diagnose(root: Node<'_>, code: &str) -> ParseError {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_missing() {
            return at(node, format!("missing `{}`", node.kind()));
        }
        if node.is_error() {
            let text = node.utf8_text(code.as_bytes()).unwrap_or_default().trim();
            let detail = if text.is_empty() {
                "unexpected end of input".to_string()
            } else {
                format!("unexpected `{}`", quote(text))
            };
            return at(node, detail);
        }

        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node
            .children(&mut cursor)
            .filter(|c| c.has_error() || c.is_missing())
            .collect();
        stack.extend(children.into_iter().rev());
    }

    at(root, "invalid syntax".to_string())
}

fn at(node: Node<'_>, detail: String) -> ParseError {
    let pos = node.start_position();
    ParseError {
        line: pos.row + 1,
        column: pos.column + 1,
        detail,
    }
}

fn quote(text: &str) -> String {
    match text.char_indices().nth(MAX_QUOTED) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}
