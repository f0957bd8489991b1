//! Gender resolver: normalizes a name and scans its tokens against a
//! [`LookupTable`].
//!
//! Tokens are scanned in priority order. The first `M`/`F` match wins and
//! stops the scan. A `UNI` match is tentative and yields to a later `M`/`F`.
//! Explicit `UNK` entries are skipped over. Tokens absent from the table are
//! collected in the unmatched set.

mod scan;

use std::sync::Arc;

use gendersort_core::constants::NULL_NAME;
use gendersort_core::errors::ResolveError;
use gendersort_core::{GenderLabel, NormalizerVariant};
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::normalizer::{normalize_with, Token};
use crate::table::LookupTable;

pub use scan::ScanState;

/// Outcome of one [`GenderResolver::assign`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub label: GenderLabel,
    /// Token whose table entry decided the label.
    pub matched: Option<Token>,
    /// Tokens not found in the table, in scan order, without repeats.
    pub unmatched: Vec<Token>,
}

impl Resolution {
    fn bare(label: GenderLabel) -> Self {
        Self {
            label,
            matched: None,
            unmatched: Vec::new(),
        }
    }
}

/// Resolves names against a shared, read-only table. Cheap to clone.
#[derive(Debug, Clone)]
pub struct GenderResolver {
    table: Arc<LookupTable>,
    variant: NormalizerVariant,
}

impl GenderResolver {
    pub fn new(table: Arc<LookupTable>) -> Self {
        Self {
            table,
            variant: NormalizerVariant::General,
        }
    }

    pub fn with_variant(mut self, variant: NormalizerVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    pub fn variant(&self) -> NormalizerVariant {
        self.variant
    }

    /// Resolve `name` to a label. Never fails: empty input and initials
    /// resolve to `INI`, names with no table match to `UNK`.
    pub fn assign(&self, name: &str) -> Resolution {
        if is_empty_input(name) {
            return Resolution::bare(GenderLabel::Initials);
        }

        let tokens = normalize_with(name, self.variant);
        if tokens.is_empty() {
            tracing::trace!(input = name, "no usable tokens");
            return Resolution::bare(GenderLabel::Initials);
        }

        let mut state = ScanState::Scanning;
        let mut unmatched = Vec::new();
        let mut seen = FxHashSet::default();

        for (idx, token) in tokens.iter().enumerate() {
            match self.lookup_token(token) {
                Some(label) => {
                    tracing::trace!(input = name, token = %token, %label, "token matched");
                    state = state.observe(label, idx);
                    if state.is_terminal() {
                        break;
                    }
                }
                None => {
                    if seen.insert(token.as_str()) {
                        unmatched.push(token.clone());
                    }
                }
            }
        }

        let (label, matched_idx) = state.finish();
        tracing::trace!(input = name, %label, unmatched = unmatched.len(), "name resolved");
        Resolution {
            label,
            matched: matched_idx.map(|idx| tokens[idx].clone()),
            unmatched,
        }
    }

    pub fn assign_label(&self, name: &str) -> GenderLabel {
        self.assign(name).label
    }

    /// Like [`assign`](Self::assign), but rejects empty or `NULL` input.
    pub fn try_assign(&self, name: &str) -> Result<Resolution, ResolveError> {
        if is_empty_input(name) {
            return Err(ResolveError::EmptyInput);
        }
        Ok(self.assign(name))
    }

    /// Uppercased form first, then its diacritic-free form.
    fn lookup_token(&self, token: &Token) -> Option<GenderLabel> {
        let key = token.lookup_key();
        self.table.lookup(&key).or_else(|| {
            let folded = token.folded_key();
            if folded == key {
                None
            } else {
                self.table.lookup(&folded)
            }
        })
    }
}

/// Blank or the literal `NULL` placeholder, case-insensitively.
pub fn is_empty_input(name: &str) -> bool {
    let trimmed = name.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NULL_NAME)
}
