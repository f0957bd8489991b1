//! Normalizer variant selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which token normalizer to run over an input name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizerVariant {
    /// Free-form names: initials, embedded periods, hyphen duplication.
    #[default]
    General,
    /// Listing-style name fields from bibliographic records.
    Bibliographic,
}

impl NormalizerVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Bibliographic => "bibliographic",
        }
    }
}

impl fmt::Display for NormalizerVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizerVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(Self::General),
            "bibliographic" | "biblio" => Ok(Self::Bibliographic),
            other => Err(format!("unknown normalizer variant '{other}'")),
        }
    }
}
