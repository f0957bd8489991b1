//! Lookup table record errors. Non-fatal: the record is skipped.

use super::error_code::{self, GendersortErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("Malformed table record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Unknown label '{label}' at line {line}")]
    UnknownLabel { line: usize, label: String },
}

impl TableError {
    /// 1-based line number of the offending record.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedRecord { line, .. } | Self::UnknownLabel { line, .. } => *line,
        }
    }
}

impl GendersortErrorCode for TableError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedRecord { .. } => error_code::TABLE_RECORD_MALFORMED,
            Self::UnknownLabel { .. } => error_code::TABLE_UNKNOWN_LABEL,
        }
    }
}
