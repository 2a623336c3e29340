//! Batch conversion of a labelled snippet dataset into path-context records.
//!
//! Input is a JSON array of `{code_id, code, label}`; output is a JSON array
//! of `{code_id, contexts, label}` with one record per input sample, in
//! shuffled order. Contexts inside a record keep extraction order.

pub mod errors;
pub mod io;
pub mod transform;
pub mod types;

pub use errors::{Error, Result};
pub use transform::{extract_samples, shuffle_examples, transform_samples};
pub use types::{CodeId, CodeSample, TrainingExample};

use path_context::PathContextExtractor;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Counts reported after a file transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransformSummary {
    pub examples: usize,
    pub contexts: usize,
}

/// Read samples from `input`, transform them and write the result to `output`.
///
/// # Errors
/// Returns [`Error`] if reading, extraction of any sample, or writing fails.
/// Nothing is written when extraction fails.
#[tracing::instrument(level = "info", skip_all, fields(input = %input.as_ref().display()))]
pub fn transform_file(
    extractor: &PathContextExtractor,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    seed: Option<u64>,
) -> Result<TransformSummary> {
    let samples = io::read_samples(&input)?;
    info!(count = samples.len(), "Loaded samples");

    let examples = transform_samples(extractor, &samples, seed)?;
    io::write_pretty(&output, &examples)?;
    info!(output = %output.as_ref().display(), "Training data written");

    Ok(TransformSummary {
        examples: examples.len(),
        contexts: examples.iter().map(|e| e.contexts.len()).sum(),
    })
}
