//! Pairwise path generation between terminals.
//!
//! For terminals `T[0..n]` every pair `(i, j)` with `i < j` is visited in
//! ascending order. A pair yields a context unless it is pruned:
//!
//! 1. `length = |start chain| + |end chain| - 2k`, where `k` is the number of
//!    shared ancestors counted from the root. Rejected when `length > max_path_length`.
//! 2. Only when the branching node is strictly above both ends: the
//!    sibling-index gap between its two children on the path. Rejected when
//!    `width > max_path_width`.
//!
//! Length is checked before width, and width is skipped when one end is the
//! branching node itself.

use crate::config::ExtractConfig;
use crate::tree::{NodeId, SyntaxTree};
use crate::types::{DOWN_SYMBOL, LPAREN, PathContext, RPAREN, UP_SYMBOL};

/// Renders paths under fixed length/width limits.
#[derive(Debug, Clone, Copy)]
pub struct PathGenerator {
    max_length: usize,
    max_width: usize,
}

impl PathGenerator {
    pub fn new(max_length: usize, max_width: usize) -> Self {
        Self {
            max_length,
            max_width,
        }
    }

    pub fn from_config(cfg: &ExtractConfig) -> Self {
        Self::new(cfg.max_path_length, cfg.max_path_width)
    }

    /// Rendered path from `start` to `end`, or `None` when the pair is pruned.
    pub fn path_between(&self, tree: &SyntaxTree, start: NodeId, end: NodeId) -> Option<String> {
        if start == end {
            return None;
        }

        let start_chain = tree.ancestors(start);
        let end_chain = tree.ancestors(end);

        let common = start_chain
            .iter()
            .rev()
            .zip(end_chain.iter().rev())
            .take_while(|(a, b)| a == b)
            .count();

        let length = start_chain.len() + end_chain.len() - 2 * common;
        if length > self.max_length {
            return None;
        }

        if start_chain.len() > common && end_chain.len() > common {
            let toward_start = tree.node(start_chain[start_chain.len() - 1 - common]);
            let toward_end = tree.node(end_chain[end_chain.len() - 1 - common]);
            let width = toward_end
                .sibling_index()
                .abs_diff(toward_start.sibling_index());
            if width > self.max_width {
                return None;
            }
        }

        let up = &start_chain[..start_chain.len() - common];
        let down = &end_chain[..end_chain.len() - common];

        let mut path = String::new();
        for id in up {
            push_kind(&mut path, tree.node(*id).kind());
            path.push(UP_SYMBOL);
        }
        if common > 0 {
            let lca = start_chain[start_chain.len() - common];
            push_kind(&mut path, tree.node(lca).kind());
        }
        for id in down.iter().rev() {
            path.push(DOWN_SYMBOL);
            push_kind(&mut path, tree.node(*id).kind());
        }
        Some(path)
    }

    /// Lazily enumerates accepted contexts over `terminals` in `(i, j)` order.
    pub fn contexts<'t>(&self, tree: &'t SyntaxTree, terminals: &'t [NodeId]) -> PathContexts<'t> {
        PathContexts {
            generator: *self,
            tree,
            terminals,
            i: 0,
            j: 1,
        }
    }
}

fn push_kind(path: &mut String, kind: &str) {
    path.push(LPAREN);
    path.push_str(kind);
    path.push(RPAREN);
}

/// Iterator returned by [`PathGenerator::contexts`].
///
/// Nothing is computed ahead of `next()`, so a consumer that stops early
/// never pays for the remaining pairs.
pub struct PathContexts<'t> {
    generator: PathGenerator,
    tree: &'t SyntaxTree,
    terminals: &'t [NodeId],
    i: usize,
    j: usize,
}

impl Iterator for PathContexts<'_> {
    type Item = PathContext;

    fn next(&mut self) -> Option<PathContext> {
        let n = self.terminals.len();
        while self.i + 1 < n {
            if self.j >= n {
                self.i += 1;
                self.j = self.i + 1;
                continue;
            }

            let start = self.terminals[self.i];
            let end = self.terminals[self.j];
            self.j += 1;

            if let Some(path) = self.generator.path_between(self.tree, start, end) {
                let (Some(start_token), Some(end_token)) =
                    (self.tree.node(start).value(), self.tree.node(end).value())
                else {
                    continue;
                };
                return Some(PathContext {
                    start_token: start_token.to_string(),
                    path,
                    end_token: end_token.to_string(),
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// module > expression_statement > assignment > (x, 1)
    fn assignment() -> (SyntaxTree, NodeId, NodeId) {
        let mut t = SyntaxTree::new("module", None);
        let stmt = t.push(t.root(), "expression_statement", None);
        let assign = t.push(stmt, "assignment", None);
        let x = t.push(assign, "identifier", Some("x".into()));
        let one = t.push(assign, "integer", Some("1".into()));
        (t, x, one)
    }

    /// A terminal under the root, then a terminal below `depth` nested blocks.
    fn deep(depth: usize) -> (SyntaxTree, NodeId, NodeId) {
        let mut t = SyntaxTree::new("module", None);
        let shallow = t.push(t.root(), "identifier", Some("top".into()));
        let mut parent = t.root();
        for _ in 0..depth {
            parent = t.push(parent, "block", None);
        }
        let leaf = t.push(parent, "identifier", Some("bottom".into()));
        (t, shallow, leaf)
    }

    #[test]
    fn renders_up_lca_down() {
        let (t, x, one) = assignment();
        let g = PathGenerator::new(8, 2);
        assert_eq!(
            g.path_between(&t, x, one).as_deref(),
            Some("(identifier)^(assignment)_(integer)")
        );
        assert_eq!(
            g.path_between(&t, one, x).as_deref(),
            Some("(integer)^(assignment)_(identifier)")
        );
    }

    #[test]
    fn same_node_yields_nothing() {
        let (t, x, _) = assignment();
        assert_eq!(PathGenerator::new(8, 2).path_between(&t, x, x), None);
    }

    #[test]
    fn length_limit_is_inclusive() {
        // top: [top, module]; bottom: [bottom, block x depth, module]; k = 1
        // length = 2 + (depth + 2) - 2 = depth + 2
        let (t, top, bottom) = deep(6);
        assert!(PathGenerator::new(8, 2).path_between(&t, top, bottom).is_some());

        let (t, top, bottom) = deep(7);
        assert!(PathGenerator::new(8, 2).path_between(&t, top, bottom).is_none());
        assert!(PathGenerator::new(9, 2).path_between(&t, top, bottom).is_some());
    }

    #[test]
    fn width_limit_is_inclusive() {
        let mut t = SyntaxTree::new("argument_list", None);
        let args: Vec<NodeId> = (0..4)
            .map(|i| t.push(t.root(), "identifier", Some(format!("a{i}"))))
            .collect();
        let g = PathGenerator::new(8, 2);
        assert!(g.path_between(&t, args[0], args[2]).is_some());
        assert!(g.path_between(&t, args[0], args[3]).is_none());
        assert!(PathGenerator::new(8, 3).path_between(&t, args[0], args[3]).is_some());
    }

    #[test]
    fn width_is_skipped_when_an_end_is_the_branching_node() {
        // A terminal that still has children: the path to its descendant has
        // no second branch, so only the length limit applies.
        let mut t = SyntaxTree::new("module", None);
        t.push(t.root(), "identifier", Some("before".into()));
        let holder = t.push(t.root(), "identifier", Some("outer".into()));
        let inner = t.push(holder, "identifier", Some("inner".into()));

        let g = PathGenerator::new(8, 0);
        assert_eq!(
            g.path_between(&t, holder, inner).as_deref(),
            Some("(identifier)_(identifier)")
        );
    }

    #[test]
    fn contexts_follow_pair_order_and_skip_pruned() {
        let mut t = SyntaxTree::new("argument_list", None);
        let ids: Vec<NodeId> = ["a", "b", "c", "d"]
            .iter()
            .map(|v| t.push(t.root(), "identifier", Some(v.to_string())))
            .collect();

        let pairs: Vec<(String, String)> = PathGenerator::new(8, 2)
            .contexts(&t, &ids)
            .map(|c| (c.start_token, c.end_token))
            .collect();
        let expected: Vec<(String, String)> = [
            ("a", "b"),
            ("a", "c"),
            ("b", "c"),
            ("b", "d"),
            ("c", "d"),
        ]
        .iter()
        .map(|(s, e)| (s.to_string(), e.to_string()))
        .collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn fewer_than_two_terminals_yield_nothing() {
        let (t, x, _) = assignment();
        let g = PathGenerator::new(8, 2);
        assert_eq!(g.contexts(&t, &[]).count(), 0);
        assert_eq!(g.contexts(&t, &[x]).count(), 0);
    }
}
