//! Resolution errors.
//!
//! The resolver itself never fails: an unclassifiable name is the `UNK`
//! outcome. This enum exists for callers that want to reject degenerate
//! input before resolving it.

use super::error_code::{self, GendersortErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Empty name input")]
    EmptyInput,
}

impl GendersortErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        error_code::EMPTY_INPUT
    }
}
