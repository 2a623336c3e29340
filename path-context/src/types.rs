use serde::{Deserialize, Serialize};
use std::fmt;

/// Path alphabet. Kind names are grammar identifiers and never contain these.
pub const LPAREN: char = '(';
pub const RPAREN: char = ')';
pub const UP_SYMBOL: char = '^';
pub const DOWN_SYMBOL: char = '_';

/// One (start terminal, syntactic path, end terminal) triple.
///
/// Contexts are plain values: structurally identical triples coming from
/// different terminal pairs are kept as separate entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathContext {
    pub start_token: String,
    pub path: String,
    pub end_token: String,
}

impl PathContext {
    /// Number of `(kind)` segments on the up and down legs, excluding the
    /// branching node itself.
    ///
    /// Kind names may contain `_` (`expression_statement`), so a down step is
    /// only counted where `_` directly precedes `(`.
    pub fn step_count(&self) -> usize {
        let ups = self.path.matches(UP_SYMBOL).count();
        let downs = self
            .path
            .match_indices(DOWN_SYMBOL)
            .filter(|(i, _)| self.path[i + 1..].starts_with(LPAREN))
            .count();
        ups + downs
    }
}

/// `start,path,end`, the classic one-line context form.
impl fmt::Display for PathContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.start_token, self.path, self.end_token)
    }
}

/// Serializable record `{start_token, path, end_token}` handed to consumers
/// outside the extractor (dataset files, classifiers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRecord {
    pub start_token: String,
    pub path: String,
    pub end_token: String,
}

impl From<PathContext> for ContextRecord {
    fn from(ctx: PathContext) -> Self {
        Self {
            start_token: ctx.start_token,
            path: ctx.path,
            end_token: ctx.end_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PathContext {
        PathContext {
            start_token: "x".into(),
            path: "(identifier)^(assignment)_(integer)".into(),
            end_token: "1".into(),
        }
    }

    #[test]
    fn display_is_comma_joined() {
        assert_eq!(sample().to_string(), "x,(identifier)^(assignment)_(integer),1");
    }

    #[test]
    fn step_count_ignores_branching_node() {
        assert_eq!(sample().step_count(), 2);
    }

    #[test]
    fn underscores_inside_kinds_are_not_steps() {
        let ctx = PathContext {
            start_token: "f".into(),
            path: "(identifier)^(call)_(argument_list)_(identifier)".into(),
            end_token: "a".into(),
        };
        assert_eq!(ctx.step_count(), 3);
    }

    #[test]
    fn record_moves_fields() {
        let r = ContextRecord::from(sample());
        assert_eq!(r.start_token, "x");
        assert_eq!(r.path, "(identifier)^(assignment)_(integer)");
        assert_eq!(r.end_token, "1");
    }
}
