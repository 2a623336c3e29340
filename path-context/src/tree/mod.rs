//! Internal tree model and its construction from tree-sitter output.

mod builder;
mod node;
mod policy;

pub use builder::TreeBuilder;
pub use node::{NodeId, SyntaxTree, TreeNode};
pub use policy::{ValueExtractor, terminal_value};
