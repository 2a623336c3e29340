use thiserror::Error;

use crate::types::CodeId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serde json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// One sample could not be extracted; the whole batch is abandoned.
    #[error("sample {code_id}: {source}")]
    Extract {
        code_id: CodeId,
        #[source]
        source: path_context::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
