//! Arena-backed syntax tree.
//!
//! Nodes live in one `Vec` owned by [`SyntaxTree`]; parents and children are
//! referenced by [`NodeId`]. Parent links are lookups only, ownership always
//! stays with the arena.

/// Index of a node inside its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One syntax node: grammar kind, optional terminal value and its links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    kind: &'static str,
    value: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    sibling_index: usize,
}

impl TreeNode {
    /// Grammar category, e.g. `assignment`, `identifier`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Terminal value; `None` for structural nodes.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Position among the parent's children (0 for the root).
    pub fn sibling_index(&self) -> usize {
        self.sibling_index
    }
}

/// Rooted ordered tree; the root is always the first node and nodes are
/// appended in pre-order by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<TreeNode>,
}

impl SyntaxTree {
    /// Start a tree with its root node.
    pub fn new(root_kind: &'static str, root_value: Option<String>) -> Self {
        Self {
            nodes: vec![TreeNode {
                kind: root_kind,
                value: root_value.filter(|v| !v.is_empty()),
                parent: None,
                children: Vec::new(),
                sibling_index: 0,
            }],
        }
    }

    /// Append a node as the last child of `parent`.
    ///
    /// Empty values are normalized to `None`, so an empty literal never
    /// becomes a terminal.
    pub fn push(&mut self, parent: NodeId, kind: &'static str, value: Option<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let siblings = &mut self.nodes[parent.0].children;
        siblings.push(id);
        let sibling_index = siblings.len() - 1;

        self.nodes.push(TreeNode {
            kind,
            value: value.filter(|v| !v.is_empty()),
            parent: Some(parent),
            children: Vec::new(),
            sibling_index,
        });
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// All node ids in arena (pre-order) order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Ancestor chain from `id` up to the root, both inclusive.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = vec![id];
        let mut current = self.node(id).parent;
        while let Some(p) = current {
            chain.push(p);
            current = self.node(p).parent;
        }
        chain
    }
}
