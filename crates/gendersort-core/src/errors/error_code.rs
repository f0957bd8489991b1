//! Stable error codes shared by every error enum.

/// Maps an error to a stable code string for log queries and the CLI.
pub trait GendersortErrorCode {
    /// Returns the code (e.g. "MISSING_RESOURCE").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const TABLE_RECORD_MALFORMED: &str = "TABLE_RECORD_MALFORMED";
pub const TABLE_UNKNOWN_LABEL: &str = "TABLE_UNKNOWN_LABEL";
pub const MISSING_RESOURCE: &str = "MISSING_RESOURCE";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const PERSIST_FAILED: &str = "PERSIST_FAILED";
pub const EVIDENCE_MALFORMED: &str = "EVIDENCE_MALFORMED";
pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
