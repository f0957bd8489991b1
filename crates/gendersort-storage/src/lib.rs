//! File-backed storage for gendersort.
//!
//! Reads and writes the flat text resources the analysis crate works on:
//! the lookup table, batch input and output files, and the evidence log with
//! its backups and partial runs. Every write goes through a temporary file in
//! the destination directory and is renamed into place.

pub mod assign;
pub mod evidence_store;
pub mod fs;
pub mod table_store;

pub use assign::{assign_file, FileAssignReport, OutputPaths};
pub use evidence_store::{
    backup_log, backup_path, merge_partial_logs, partial_log_path, read_log, write_dataset,
    write_log, DatasetReport, MergeReport,
};
pub use table_store::{load_table, save_table};
