//! Path-context extraction for Python snippets.
//!
//! A snippet is parsed with tree-sitter, converted into an arena tree, and
//! summarized as `(start terminal, syntactic path, end terminal)` triples
//! between pairs of identifiers/literals. The result is bounded by
//! [`ExtractConfig`]: path length, path width, and a per-snippet context cap.
//!
//! # Example
//! ```no_run
//! use path_context::PathContextExtractor;
//!
//! fn main() -> path_context::Result<()> {
//!     let extractor = PathContextExtractor::default();
//!     for ctx in extractor.extract("x = 1")? {
//!         // x,(identifier)^(assignment)_(integer),1
//!         println!("{ctx}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod budget;
pub mod config;
pub mod errors;
pub mod parse;
pub mod paths;
pub mod terminals;
pub mod tree;
pub mod types;

pub use budget::ContextBudget;
pub use config::ExtractConfig;
pub use errors::{Error, ParseError, Result};
pub use paths::PathGenerator;
pub use tree::{NodeId, SyntaxTree, TreeBuilder, TreeNode};
pub use types::{ContextRecord, PathContext};

use tracing::debug;

/// Extraction entry point.
///
/// Holds only its limits: every call parses into its own tree and terminal
/// list, so one extractor can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathContextExtractor {
    config: ExtractConfig,
}

impl PathContextExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Parse `source` (with the function-body fallback) and extract its
    /// contexts in `(i, j)` terminal-pair order.
    ///
    /// # Errors
    /// [`Error::Parse`] when the snippet is not valid Python in either form.
    /// Pruned pairs and the context cap never produce errors.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn extract(&self, source: &str) -> Result<Vec<PathContext>> {
        let parsed = parse::parse_snippet(source)?;
        if parsed.wrapped {
            debug!("parsed as function body");
        }
        let tree = TreeBuilder::new(&parsed.code).build(&parsed.tree);
        Ok(self.extract_from_tree(&tree))
    }

    /// Same as [`PathContextExtractor::extract`], shaped as serializable records.
    pub fn extract_records(&self, source: &str) -> Result<Vec<ContextRecord>> {
        Ok(self
            .extract(source)?
            .into_iter()
            .map(ContextRecord::from)
            .collect())
    }

    /// Terminal collection, path generation and budget on a built tree.
    pub fn extract_from_tree(&self, tree: &SyntaxTree) -> Vec<PathContext> {
        let terminals = terminals::collect_terminals(tree);
        let generator = PathGenerator::from_config(&self.config);
        let budget = ContextBudget::new(self.config.max_contexts);

        let contexts = budget.collect(generator.contexts(tree, &terminals));
        debug!(
            nodes = tree.len(),
            terminals = terminals.len(),
            contexts = contexts.len(),
            at_cap = budget.is_filled(contexts.len()),
            "extracted path contexts"
        );
        contexts
    }
}

/// [`PathContextExtractor::extract`] with default limits.
pub fn extract(source: &str) -> Result<Vec<PathContext>> {
    PathContextExtractor::default().extract(source)
}

/// [`PathContextExtractor::extract_records`] with default limits.
pub fn extract_records(source: &str) -> Result<Vec<ContextRecord>> {
    PathContextExtractor::default().extract_records(source)
}
