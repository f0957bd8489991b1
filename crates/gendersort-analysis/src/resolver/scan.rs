//! Per-call scan state.

use gendersort_core::GenderLabel;

/// Where a token scan stands. `Confirmed` is terminal; `Tentative` holds the
/// index of the first `UNI` match and can still be overridden by `M`/`F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Scanning,
    Tentative(usize),
    Confirmed(GenderLabel, usize),
}

impl ScanState {
    /// Feed the table label found for token `idx`.
    pub fn observe(self, label: GenderLabel, idx: usize) -> Self {
        match (self, label) {
            (Self::Confirmed(..), _) => self,
            (_, GenderLabel::Male | GenderLabel::Female) => Self::Confirmed(label, idx),
            (Self::Scanning, GenderLabel::Unisex) => Self::Tentative(idx),
            // Explicit UNK/INI entries never settle a name.
            _ => self,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Confirmed(..))
    }

    /// Final label and the index of the token that produced it.
    pub fn finish(self) -> (GenderLabel, Option<usize>) {
        match self {
            Self::Scanning => (GenderLabel::Unknown, None),
            Self::Tentative(idx) => (GenderLabel::Unisex, Some(idx)),
            Self::Confirmed(label, idx) => (label, Some(idx)),
        }
    }
}
