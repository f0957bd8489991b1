//! The closed label vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Gender label attached to a name.
///
/// `M`/`F` carry majority evidence for one gender, `UNI` mixed evidence,
/// `INI` means the input held no usable name (initials only or empty), and
/// `UNK` means nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GenderLabel {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "UNI")]
    Unisex,
    #[serde(rename = "INI")]
    Initials,
    #[serde(rename = "UNK")]
    Unknown,
}

impl GenderLabel {
    /// All labels, in vocabulary order.
    pub const ALL: [GenderLabel; 5] = [
        GenderLabel::Male,
        GenderLabel::Female,
        GenderLabel::Unisex,
        GenderLabel::Initials,
        GenderLabel::Unknown,
    ];

    /// Wire form used in table resources and batch output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Unisex => "UNI",
            Self::Initials => "INI",
            Self::Unknown => "UNK",
        }
    }

    /// `M` or `F`: a match that ends a resolution scan.
    pub fn is_confident(self) -> bool {
        matches!(self, Self::Male | Self::Female)
    }
}

impl Default for GenderLabel {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for GenderLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the five labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender label '{0}'")]
pub struct ParseLabelError(pub String);

impl FromStr for GenderLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            "UNI" => Ok(Self::Unisex),
            "INI" => Ok(Self::Initials),
            "UNK" => Ok(Self::Unknown),
            other => Err(ParseLabelError(other.to_string())),
        }
    }
}
