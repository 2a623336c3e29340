//! Samples → training examples.

use path_context::PathContextExtractor;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use rayon::prelude::*;
use tracing::info;

use crate::errors::{Error, Result};
use crate::types::{CodeSample, TrainingExample};

/// Extract every sample, keeping input order.
///
/// Samples are independent, so they are processed in parallel; each one gets
/// its own tree inside the extractor. The first failing sample aborts the
/// batch with its `code_id` attached.
pub fn extract_samples(
    extractor: &PathContextExtractor,
    samples: &[CodeSample],
) -> Result<Vec<TrainingExample>> {
    samples
        .par_iter()
        .map(|sample| -> Result<TrainingExample> {
            let contexts = extractor
                .extract_records(&sample.code)
                .map_err(|source| Error::Extract {
                    code_id: sample.code_id.clone(),
                    source,
                })?;
            Ok(TrainingExample {
                code_id: sample.code_id.clone(),
                contexts,
                label: sample.label.clone(),
            })
        })
        .collect()
}

/// Full shuffle of the record order; a seed makes it reproducible.
/// Context order inside each record is untouched.
pub fn shuffle_examples(examples: &mut [TrainingExample], seed: Option<u64>) {
    match seed {
        Some(seed) => examples.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => examples.shuffle(&mut rand::rng()),
    }
}

/// [`extract_samples`] followed by [`shuffle_examples`].
#[tracing::instrument(level = "info", skip_all, fields(samples = samples.len(), seed = ?seed))]
pub fn transform_samples(
    extractor: &PathContextExtractor,
    samples: &[CodeSample],
    seed: Option<u64>,
) -> Result<Vec<TrainingExample>> {
    let mut examples = extract_samples(extractor, samples)?;
    shuffle_examples(&mut examples, seed);

    let contexts: usize = examples.iter().map(|e| e.contexts.len()).sum();
    info!(examples = examples.len(), contexts, "Transformed samples");
    Ok(examples)
}
