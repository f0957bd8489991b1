//! Batch resolution over many names.
//!
//! Each name resolves independently, so the batch is a parallel map. Output
//! rows keep input order; the unmatched tokens of every row are pooled into
//! one sorted, deduplicated set.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use gendersort_core::constants::FIELD_SEPARATOR;
use gendersort_core::GenderLabel;
use rayon::prelude::*;
use rayon::ThreadPool;

use crate::resolver::{GenderResolver, Resolution};

/// One input line and the label it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRow {
    pub line: String,
    pub label: GenderLabel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub rows: Vec<BatchRow>,
    /// Capitalized tokens absent from the table, sorted.
    pub unknown: BTreeSet<String>,
}

impl BatchOutcome {
    pub fn label_counts(&self) -> BTreeMap<GenderLabel, usize> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(row.label).or_insert(0) += 1;
        }
        counts
    }

    /// `LINE<TAB>LABEL` per row, newline-terminated.
    pub fn render_output(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(&row.line);
            out.push(FIELD_SEPARATOR);
            out.push_str(row.label.as_str());
            out.push('\n');
        }
        out
    }

    /// One unknown token per line.
    pub fn render_unknown(&self) -> String {
        let mut out = String::new();
        for token in &self.unknown {
            out.push_str(token);
            out.push('\n');
        }
        out
    }
}

/// Parallel driver around a [`GenderResolver`].
pub struct BatchResolver {
    resolver: GenderResolver,
    pool: Option<ThreadPool>,
}

impl BatchResolver {
    /// Runs on the global rayon pool.
    pub fn new(resolver: GenderResolver) -> Self {
        Self {
            resolver,
            pool: None,
        }
    }

    /// Use a dedicated pool of `threads` workers. Zero keeps the global pool,
    /// as does a pool that fails to build.
    pub fn with_threads(mut self, threads: usize) -> Self {
        if threads == 0 {
            return self;
        }
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => self.pool = Some(pool),
            Err(err) => {
                tracing::warn!(threads, error = %err, "falling back to global thread pool");
            }
        }
        self
    }

    pub fn resolver(&self) -> &GenderResolver {
        &self.resolver
    }

    /// Resolve every line. `rows[i]` corresponds to `lines[i]`.
    pub fn assign_all<S>(&self, lines: &[S]) -> BatchOutcome
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let resolutions: Vec<Resolution> = match &self.pool {
            Some(pool) => pool.install(|| self.resolve_par(lines)),
            None => self.resolve_par(lines),
        };

        let mut outcome = BatchOutcome::default();
        outcome.rows.reserve(lines.len());
        for (line, resolution) in lines.iter().zip(resolutions) {
            outcome
                .unknown
                .extend(resolution.unmatched.into_iter().map(|t| t.into_string()));
            outcome.rows.push(BatchRow {
                line: line.as_ref().to_string(),
                label: resolution.label,
            });
        }

        tracing::info!(
            names = outcome.rows.len(),
            unknown = outcome.unknown.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "batch resolved"
        );
        outcome
    }

    fn resolve_par<S>(&self, lines: &[S]) -> Vec<Resolution>
    where
        S: AsRef<str> + Sync,
    {
        lines
            .par_iter()
            .map(|line| self.resolver.assign(line.as_ref()))
            .collect()
    }
}
