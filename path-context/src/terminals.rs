//! Terminal collection in canonical source order.

use crate::tree::{NodeId, SyntaxTree};

/// Terminal nodes of `tree` in depth-first pre-order.
///
/// This order is the enumeration order for path generation, so it must stay
/// a pure function of the tree shape.
pub fn collect_terminals(tree: &SyntaxTree) -> Vec<NodeId> {
    let mut terminals = Vec::new();
    let mut stack = vec![tree.root()];

    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        if node.is_terminal() {
            terminals.push(id);
        }
        stack.extend(node.children().iter().rev().copied());
    }

    terminals
}
