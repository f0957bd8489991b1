//! Subcommand implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use gendersort_analysis::{normalize_with, BatchResolver, GenderResolver};
use gendersort_core::config::GendersortConfig;
use gendersort_storage::fs::read_text;
use gendersort_storage::{
    assign_file, load_table, merge_partial_logs, read_log, save_table, write_dataset, OutputPaths,
};

fn load_resolver(config: &GendersortConfig) -> anyhow::Result<GenderResolver> {
    let path = Path::new(config.table.effective_path());
    let report = load_table(path).with_context(|| format!("loading lookup table {}", path.display()))?;
    if !report.is_clean() {
        eprintln!(
            "warning: skipped {} malformed record(s) in {}",
            report.error_count(),
            path.display()
        );
    }
    Ok(GenderResolver::new(Arc::new(report.into_data()))
        .with_variant(config.normalizer.effective_variant()))
}

/// Non-empty lines of a names file.
fn read_names(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = read_text(path).with_context(|| format!("reading names from {}", path.display()))?;
    Ok(text
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn assign(config: &GendersortConfig, names: &[String], json: bool) -> anyhow::Result<()> {
    let resolver = load_resolver(config)?;
    for name in names {
        let resolution = resolver.assign(name);
        if json {
            println!("{}", serde_json::to_string(&resolution)?);
        } else {
            println!("{name}\t{}", resolution.label);
        }
    }
    Ok(())
}

pub fn normalize(config: &GendersortConfig, names: &[String]) {
    let variant = config.normalizer.effective_variant();
    for name in names {
        let tokens = normalize_with(name, variant);
        let texts: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
        println!("{name}\t{}", texts.join(" "));
    }
}

pub fn file(
    config: &GendersortConfig,
    input: &Path,
    output: Option<PathBuf>,
    unknown: Option<PathBuf>,
) -> anyhow::Result<()> {
    let batch =
        BatchResolver::new(load_resolver(config)?).with_threads(config.batch.effective_threads());
    let paths = OutputPaths::for_input(input, &config.batch)
        .with_output(output)
        .with_unknown(unknown);
    let report = assign_file(&batch, input, &paths)
        .with_context(|| format!("assigning {}", input.display()))?;

    println!("{} names written to {}", report.names, report.output.display());
    for (label, count) in &report.label_counts {
        println!("  {label}\t{count}");
    }
    if let Some(unknown) = &report.unknown {
        println!("{} unknown names written to {}", report.unknown_count, unknown.display());
    }
    Ok(())
}

pub fn table_stats(config: &GendersortConfig) -> anyhow::Result<()> {
    let path = Path::new(config.table.effective_path());
    let report = load_table(path).with_context(|| format!("loading lookup table {}", path.display()))?;
    println!("{}: {} records", path.display(), report.data.len());
    for (label, count) in report.data.stats() {
        println!("  {label}\t{count}");
    }
    for err in &report.errors {
        println!("  skipped: {err}");
    }
    Ok(())
}

pub fn table_rewrite(config: &GendersortConfig, out: &Path) -> anyhow::Result<()> {
    let resolver = load_resolver(config)?;
    save_table(out, resolver.table()).with_context(|| format!("writing {}", out.display()))?;
    println!("{} records written to {}", resolver.table().len(), out.display());
    Ok(())
}

fn log_path(config: &GendersortConfig, log: Option<PathBuf>) -> PathBuf {
    log.unwrap_or_else(|| PathBuf::from(config.evidence.effective_log_file()))
}

fn names_path(config: &GendersortConfig, names: Option<PathBuf>) -> PathBuf {
    names.unwrap_or_else(|| PathBuf::from(config.evidence.effective_names_file()))
}

pub fn evidence_merge(config: &GendersortConfig, log: Option<PathBuf>) -> anyhow::Result<()> {
    let log = log_path(config, log);
    let report = merge_partial_logs(&log).with_context(|| format!("merging into {}", log.display()))?;
    if let Some(backup) = &report.backup {
        println!("backed up {} to {}", log.display(), backup.display());
    }
    for partial in &report.partials {
        println!("merged {}", partial.display());
    }
    for err in &report.skipped {
        println!("  skipped: {err}");
    }
    println!("{} records in {}", report.records, log.display());
    Ok(())
}

pub fn evidence_pending(
    config: &GendersortConfig,
    names: Option<PathBuf>,
    log: Option<PathBuf>,
) -> anyhow::Result<()> {
    let names = read_names(&names_path(config, names))?;
    let log = log_path(config, log);
    let evidence = if log.exists() {
        read_log(&log)
            .with_context(|| format!("reading {}", log.display()))?
            .into_data()
    } else {
        Default::default()
    };
    for name in evidence.pending(&names) {
        println!("{name}");
    }
    Ok(())
}

pub fn evidence_dataset(
    config: &GendersortConfig,
    names: Option<PathBuf>,
    log: Option<PathBuf>,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let names = read_names(&names_path(config, names))?;
    let log = log_path(config, log);
    let out = out.unwrap_or_else(|| PathBuf::from(config.evidence.effective_dataset_file()));
    let evidence = read_log(&log)
        .with_context(|| format!("reading {}", log.display()))?
        .into_data();
    let report = write_dataset(&out, &names, &evidence)
        .with_context(|| format!("writing {}", out.display()))?;
    for name in &report.missing {
        eprintln!("warning: {name} is not in the log");
    }
    println!("{} rows written to {}", report.rows, out.display());
    Ok(())
}
