//! Extraction limits.
//!
//! All three limits change which terminal pairs are accepted, so they are
//! deployment settings rather than tuning knobs:
//! - `PATH_CONTEXT_MAX_LENGTH`   (default: 8)
//! - `PATH_CONTEXT_MAX_WIDTH`    (default: 2)
//! - `PATH_CONTEXT_MAX_CONTEXTS` (default: 200)

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

pub const DEFAULT_MAX_PATH_LENGTH: usize = 8;
pub const DEFAULT_MAX_PATH_WIDTH: usize = 2;
pub const DEFAULT_MAX_CONTEXTS: usize = 200;

/// Pruning and budget limits applied to every extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Maximum number of up + down steps in a path (inclusive).
    pub max_path_length: usize,
    /// Maximum sibling-index gap at the branching node (inclusive).
    pub max_path_width: usize,
    /// Hard cap on contexts returned for one snippet.
    pub max_contexts: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            max_path_width: DEFAULT_MAX_PATH_WIDTH,
            max_contexts: DEFAULT_MAX_CONTEXTS,
        }
    }
}

impl ExtractConfig {
    /// Build configuration from `PATH_CONTEXT_*` environment variables,
    /// falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ExtractConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let cfg = Self {
            max_path_length: read_usize(&lookup, "PATH_CONTEXT_MAX_LENGTH")?
                .unwrap_or(defaults.max_path_length),
            max_path_width: read_usize(&lookup, "PATH_CONTEXT_MAX_WIDTH")?
                .unwrap_or(defaults.max_path_width),
            max_contexts: read_usize(&lookup, "PATH_CONTEXT_MAX_CONTEXTS")?
                .unwrap_or(defaults.max_contexts),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject degenerate limits.
    pub fn validate(&self) -> Result<()> {
        if self.max_path_length == 0 {
            return Err(Error::InvalidConfig(
                "`max_path_length` must be greater than 0".into(),
            ));
        }
        if self.max_contexts == 0 {
            return Err(Error::InvalidConfig(
                "`max_contexts` must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

fn read_usize(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<usize>> {
    match lookup(key) {
        Some(v) if !v.trim().is_empty() => {
            v.trim()
                .parse::<usize>()
                .map(Some)
                .map_err(|_| Error::EnvParse {
                    key: key.into(),
                    value: v,
                })
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_variables_use_defaults() {
        let cfg = ExtractConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, ExtractConfig::default());
        assert_eq!(cfg.max_path_length, 8);
        assert_eq!(cfg.max_path_width, 2);
        assert_eq!(cfg.max_contexts, 200);
    }

    #[test]
    fn overrides_are_read() {
        let cfg = ExtractConfig::from_lookup(lookup_from(&[
            ("PATH_CONTEXT_MAX_LENGTH", "6"),
            ("PATH_CONTEXT_MAX_CONTEXTS", " 50 "),
        ]))
        .unwrap();
        assert_eq!(cfg.max_path_length, 6);
        assert_eq!(cfg.max_path_width, 2);
        assert_eq!(cfg.max_contexts, 50);
    }

    #[test]
    fn malformed_value_is_reported() {
        let err = ExtractConfig::from_lookup(lookup_from(&[("PATH_CONTEXT_MAX_WIDTH", "wide")]))
            .unwrap_err();
        match err {
            Error::EnvParse { key, value } => {
                assert_eq!(key, "PATH_CONTEXT_MAX_WIDTH");
                assert_eq!(value, "wide");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_budget_is_rejected() {
        let err = ExtractConfig::from_lookup(lookup_from(&[("PATH_CONTEXT_MAX_CONTEXTS", "0")]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
