//! Normalizer configuration.

use serde::{Deserialize, Serialize};

use crate::types::NormalizerVariant;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NormalizerConfig {
    /// `general` or `bibliographic`. Default: `general`.
    pub variant: Option<NormalizerVariant>,
}

impl NormalizerConfig {
    pub fn effective_variant(&self) -> NormalizerVariant {
        self.variant.unwrap_or_default()
    }
}
