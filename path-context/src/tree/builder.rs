//! Tree-sitter tree → [`SyntaxTree`] conversion.

use tree_sitter::{Node, Tree};

use super::node::{NodeId, SyntaxTree};
use super::policy::terminal_value;

/// Builds a [`SyntaxTree`] from a parsed tree-sitter tree in one pre-order pass.
///
/// Only named, non-extra nodes are kept: anonymous tokens (`=`, `(`, keywords)
/// and extras such as comments are not part of the abstract tree. Terminal
/// nodes are not descended into.
pub struct TreeBuilder<'a> {
    code: &'a [u8],
}

impl<'a> TreeBuilder<'a> {
    /// `code` must be the exact text the tree was parsed from.
    pub fn new(code: &'a str) -> Self {
        Self {
            code: code.as_bytes(),
        }
    }

    pub fn build(&self, tree: &Tree) -> SyntaxTree {
        self.build_from(tree.root_node())
    }

    pub fn build_from(&self, root: Node<'_>) -> SyntaxTree {
        let root_value = terminal_value(root, self.code);
        let descend_root = root_value.is_none();
        let mut out = SyntaxTree::new(root.kind(), root_value);
        if !descend_root {
            return out;
        }

        // Children are pushed in reverse so they pop in source order,
        // which keeps arena order equal to pre-order.
        let mut stack: Vec<(Node<'_>, NodeId)> = Vec::new();
        push_children(&mut stack, root, out.root());

        while let Some((node, parent)) = stack.pop() {
            let value = terminal_value(node, self.code);
            let is_terminal = value.is_some();
            let id = out.push(parent, node.kind(), value);
            if !is_terminal {
                push_children(&mut stack, node, id);
            }
        }

        out
    }
}

fn push_children<'t>(stack: &mut Vec<(Node<'t>, NodeId)>, node: Node<'t>, id: NodeId) {
    let mut cursor = node.walk();
    let kept: Vec<Node<'t>> = node
        .named_children(&mut cursor)
        .filter(|c| !c.is_extra())
        .collect();
    stack.extend(kept.into_iter().rev().map(|c| (c, id)));
}
