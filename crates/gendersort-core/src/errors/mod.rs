//! Error handling for gendersort.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod evidence_error;
pub mod load_report;
pub mod resolve_error;
pub mod storage_error;
pub mod table_error;

pub use config_error::ConfigError;
pub use error_code::GendersortErrorCode;
pub use evidence_error::EvidenceError;
pub use load_report::LoadReport;
pub use resolve_error::ResolveError;
pub use storage_error::StorageError;
pub use table_error::TableError;
