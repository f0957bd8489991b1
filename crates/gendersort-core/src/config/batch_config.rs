//! Batch resolution configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_OUTPUT_SUFFIX, DEFAULT_UNKNOWN_SUFFIX};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BatchConfig {
    /// Worker threads. 0 or unset uses the rayon global pool.
    pub threads: Option<usize>,
    /// Suffix for the output file next to the input. Default: `_output.txt`.
    pub output_suffix: Option<String>,
    /// Suffix for the unknown-names file. Default: `_unknown.txt`.
    pub unknown_suffix: Option<String>,
}

impl BatchConfig {
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }

    pub fn effective_output_suffix(&self) -> &str {
        self.output_suffix.as_deref().unwrap_or(DEFAULT_OUTPUT_SUFFIX)
    }

    pub fn effective_unknown_suffix(&self) -> &str {
        self.unknown_suffix.as_deref().unwrap_or(DEFAULT_UNKNOWN_SUFFIX)
    }
}
