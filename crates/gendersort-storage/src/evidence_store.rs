//! Evidence log files: backups, partial runs, and the dataset derived from
//! the log.
//!
//! For a log `NamesLog.txt`, backups are `NamesLog_bu1.txt`,
//! `NamesLog_bu2.txt`, ... and partial runs are `NamesLog1.txt`,
//! `NamesLog2.txt`, ...

use std::path::{Path, PathBuf};

use gendersort_analysis::evidence::EvidenceLog;
use gendersort_core::constants::FIELD_SEPARATOR;
use gendersort_core::errors::{EvidenceError, LoadReport, StorageError};

use crate::fs::{read_text, write_atomic};

fn with_stem_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    path.with_file_name(name)
}

/// First `<stem>_bu<N><ext>` that does not exist yet.
pub fn backup_path(log: &Path) -> PathBuf {
    let mut n = 1;
    loop {
        let candidate = with_stem_suffix(log, &format!("_bu{n}"));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// `<stem><n><ext>`.
pub fn partial_log_path(log: &Path, n: usize) -> PathBuf {
    with_stem_suffix(log, &n.to_string())
}

/// Copy `log` to the next free backup path. Returns `None` when there is no
/// log to back up.
pub fn backup_log(log: &Path) -> Result<Option<PathBuf>, StorageError> {
    if !log.exists() {
        return Ok(None);
    }
    let target = backup_path(log);
    std::fs::copy(log, &target).map_err(|e| StorageError::io(target.display().to_string(), e))?;
    tracing::info!(log = %log.display(), backup = %target.display(), "evidence log backed up");
    Ok(Some(target))
}

pub fn read_log(path: &Path) -> Result<LoadReport<EvidenceLog, EvidenceError>, StorageError> {
    let text = read_text(path)?;
    Ok(EvidenceLog::parse(&text))
}

pub fn write_log(path: &Path, log: &EvidenceLog) -> Result<(), StorageError> {
    write_atomic(path, &log.render())?;
    tracing::info!(path = %path.display(), records = log.len(), "evidence log written");
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct MergeReport {
    pub backup: Option<PathBuf>,
    /// Partial logs folded in, in numeric order.
    pub partials: Vec<PathBuf>,
    pub records: usize,
    pub skipped: Vec<EvidenceError>,
}

/// Fold `<stem>1<ext>`, `<stem>2<ext>`, ... into `base`, keeping the latest
/// record per name. `base` is backed up first. Numbering stops at the first
/// missing partial. The partial files are left in place.
pub fn merge_partial_logs(base: &Path) -> Result<MergeReport, StorageError> {
    let mut report = MergeReport {
        backup: backup_log(base)?,
        ..MergeReport::default()
    };

    let mut merged = if base.exists() {
        let loaded = read_log(base)?;
        report.skipped.extend(loaded.errors);
        loaded.data
    } else {
        EvidenceLog::new()
    };

    for n in 1.. {
        let partial = partial_log_path(base, n);
        if !partial.exists() {
            break;
        }
        let loaded = read_log(&partial)?;
        tracing::debug!(partial = %partial.display(), records = loaded.data.len(), "merging partial log");
        report.skipped.extend(loaded.errors);
        merged.merge(loaded.data);
        report.partials.push(partial);
    }

    write_log(base, &merged)?;
    report.records = merged.len();
    Ok(report)
}

#[derive(Debug, Clone, Default)]
pub struct DatasetReport {
    pub rows: usize,
    /// Input names without a log record; left out of the dataset.
    pub missing: Vec<String>,
}

/// Write `NAME<TAB>LABEL` for each of `names` the log knows, in input order.
pub fn write_dataset<S: AsRef<str>>(
    path: &Path,
    names: &[S],
    log: &EvidenceLog,
) -> Result<DatasetReport, StorageError> {
    let dataset = log.dataset(names);
    let mut out = String::new();
    for (name, label) in &dataset.rows {
        out.push_str(name);
        out.push(FIELD_SEPARATOR);
        out.push_str(label.as_str());
        out.push('\n');
    }
    write_atomic(path, &out)?;
    for name in &dataset.missing {
        tracing::warn!(name = %name, "name has no evidence record");
    }
    tracing::info!(path = %path.display(), rows = dataset.rows.len(), missing = dataset.missing.len(), "dataset written");
    Ok(DatasetReport {
        rows: dataset.rows.len(),
        missing: dataset.missing,
    })
}
