//! Unified error type for the path-context crate.

use std::fmt;
use thiserror::Error;

/// Syntax diagnostic for a snippet that could not be parsed.
///
/// `line` and `column` are 1-based and refer to the caller's source text,
/// never to the synthetic function wrapper used by the fallback attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    /// Short description: `unexpected `...`` or `missing `)``.
    pub detail: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {}, column {})", self.detail, self.line, self.column)
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Error)]
pub enum Error {
    // ── Parsing ─────────────────────────────────────────────────────────────
    /// Source is not valid Python, even when wrapped as a function body.
    #[error("could not parse code: {0}")]
    Parse(#[from] ParseError),

    /// Grammar could not be loaded into the parser (ABI mismatch).
    #[error("tree-sitter language error: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// Tree-sitter returned no tree at all.
    #[error("tree-sitter parse aborted")]
    ParserAborted,

    // ── Configuration / environment ─────────────────────────────────────────
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to parse an environment variable into the expected type.
    #[error("failed to parse env variable: {key} = '{value}'")]
    EnvParse { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
