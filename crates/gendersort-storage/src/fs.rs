//! Text file helpers.

use std::io::Write;
use std::path::Path;

use gendersort_core::errors::StorageError;
use tempfile::NamedTempFile;

pub fn read_text(path: &Path) -> Result<String, StorageError> {
    std::fs::read_to_string(path).map_err(|e| StorageError::io(path.display().to_string(), e))
}

/// Write `contents` to a temporary file next to `path`, then rename it over
/// `path`. Readers see either the old file or the complete new one.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), StorageError> {
    let display = path.display().to_string();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StorageError::io(&display, e))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| StorageError::io(&display, e))?;
    tmp.persist(path).map_err(|e| StorageError::Persist {
        path: display,
        message: e.error.to_string(),
    })?;
    Ok(())
}
