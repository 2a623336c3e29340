//! Per-call cap on emitted contexts.

use crate::types::PathContext;

/// Stops pulling from a context stream once `cap` items were taken.
///
/// The stream is consumed in its own order; nothing is reordered, sampled,
/// or resumed. Hitting the cap is a normal end of extraction.
#[derive(Debug, Clone, Copy)]
pub struct ContextBudget {
    cap: usize,
}

impl ContextBudget {
    pub fn new(cap: usize) -> Self {
        Self { cap }
    }

    /// Drain `contexts` until it ends or the cap is reached.
    pub fn collect<I>(&self, contexts: I) -> Vec<PathContext>
    where
        I: IntoIterator<Item = PathContext>,
    {
        let mut out = Vec::new();
        if self.cap == 0 {
            return out;
        }
        for ctx in contexts {
            out.push(ctx);
            if out.len() >= self.cap {
                break;
            }
        }
        out
    }

    /// True when `emitted` filled the cap. The stream may or may not have had
    /// more to give; it is never pulled past the cap to find out.
    pub fn is_filled(&self, emitted: usize) -> bool {
        emitted >= self.cap
    }
}
