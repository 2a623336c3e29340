use path_context::ContextRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dataset key of a sample; datasets use either integers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeId {
    Int(i64),
    Text(String),
}

impl fmt::Display for CodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeId::Int(n) => write!(f, "{n}"),
            CodeId::Text(s) => f.write_str(s),
        }
    }
}

/// Input record: one labelled snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    pub code_id: CodeId,
    pub code: String,
    pub label: String,
}

/// Output record: the snippet replaced by its path contexts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub code_id: CodeId,
    pub contexts: Vec<ContextRecord>,
    pub label: String,
}
