//! Evidence log errors. Non-fatal: the block is skipped.

use super::error_code::{self, GendersortErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvidenceError {
    #[error("Malformed evidence block #{index}: {reason}")]
    MalformedBlock { index: usize, reason: String },
}

impl GendersortErrorCode for EvidenceError {
    fn error_code(&self) -> &'static str {
        error_code::EVIDENCE_MALFORMED
    }
}
