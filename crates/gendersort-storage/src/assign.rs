//! Batch assignment of a names file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use gendersort_analysis::BatchResolver;
use gendersort_core::config::BatchConfig;
use gendersort_core::errors::StorageError;
use gendersort_core::GenderLabel;

use crate::fs::{read_text, write_atomic};

/// Where the results of assigning one input file go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub output: PathBuf,
    pub unknown: PathBuf,
}

impl OutputPaths {
    /// `<dir>/<stem><suffix>` for both artifacts, suffixes from `config`.
    pub fn for_input(input: &Path, config: &BatchConfig) -> Self {
        Self {
            output: sibling_with_suffix(input, config.effective_output_suffix()),
            unknown: sibling_with_suffix(input, config.effective_unknown_suffix()),
        }
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        self
    }

    pub fn with_unknown(mut self, unknown: Option<PathBuf>) -> Self {
        if let Some(unknown) = unknown {
            self.unknown = unknown;
        }
        self
    }
}

fn sibling_with_suffix(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{suffix}"))
}

#[derive(Debug, Clone)]
pub struct FileAssignReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Set only when there were unknown tokens to write.
    pub unknown: Option<PathBuf>,
    pub names: usize,
    pub unknown_count: usize,
    pub label_counts: BTreeMap<GenderLabel, usize>,
}

/// Resolve every line of `input`, write `LINE<TAB>LABEL` rows to
/// `paths.output`, and the sorted unknown tokens to `paths.unknown` when
/// there are any.
pub fn assign_file(
    batch: &BatchResolver,
    input: &Path,
    paths: &OutputPaths,
) -> Result<FileAssignReport, StorageError> {
    let text = read_text(input)?;
    let lines: Vec<&str> = text.lines().collect();
    let outcome = batch.assign_all(&lines);

    write_atomic(&paths.output, &outcome.render_output())?;
    let unknown = if outcome.unknown.is_empty() {
        None
    } else {
        write_atomic(&paths.unknown, &outcome.render_unknown())?;
        Some(paths.unknown.clone())
    };

    tracing::info!(
        input = %input.display(),
        output = %paths.output.display(),
        names = outcome.rows.len(),
        unknown = outcome.unknown.len(),
        "file assigned"
    );

    Ok(FileAssignReport {
        input: input.to_path_buf(),
        output: paths.output.clone(),
        unknown,
        names: outcome.rows.len(),
        unknown_count: outcome.unknown.len(),
        label_counts: outcome.label_counts(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_sit_next_to_input() {
        let paths = OutputPaths::for_input(Path::new("/data/authors.txt"), &BatchConfig::default());
        assert_eq!(paths.output, PathBuf::from("/data/authors_output.txt"));
        assert_eq!(paths.unknown, PathBuf::from("/data/authors_unknown.txt"));
    }

    #[test]
    fn overrides_replace_defaults() {
        let paths = OutputPaths::for_input(Path::new("names.csv"), &BatchConfig::default())
            .with_output(Some(PathBuf::from("out.tsv")))
            .with_unknown(None);
        assert_eq!(paths.output, PathBuf::from("out.tsv"));
        assert_eq!(paths.unknown, PathBuf::from("names_unknown.txt"));
    }
}
