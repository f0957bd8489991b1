//! Immutable name-key to label table.
//!
//! Built once from tab-separated `NAME<TAB>LABEL` records and never mutated
//! afterwards, so a single instance can be shared across threads behind an
//! `Arc`. Keys are uppercased and held in a sorted vector; lookups are a
//! binary search.

use std::collections::BTreeMap;

use gendersort_core::constants::FIELD_SEPARATOR;
use gendersort_core::errors::{LoadReport, TableError};
use gendersort_core::GenderLabel;
use serde::{Deserialize, Serialize};

/// One `KEY -> LABEL` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub key: String,
    pub label: GenderLabel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: Vec<TableEntry>,
}

impl LookupTable {
    /// Build from `(name, label)` pairs. Keys are trimmed and uppercased. On
    /// a duplicate key the first record seen wins.
    pub fn from_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = (S, GenderLabel)>,
        S: AsRef<str>,
    {
        Self::build(records).0
    }

    fn build<I, S>(records: I) -> (Self, usize)
    where
        I: IntoIterator<Item = (S, GenderLabel)>,
        S: AsRef<str>,
    {
        let mut entries: Vec<TableEntry> = records
            .into_iter()
            .map(|(name, label)| TableEntry {
                key: name.as_ref().trim().to_uppercase(),
                label,
            })
            .collect();
        let before = entries.len();
        // Stable sort keeps input order among equal keys; dedup keeps the first.
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries.dedup_by(|later, earlier| {
            let duplicate = later.key == earlier.key;
            if duplicate {
                tracing::debug!(key = %later.key, kept = %earlier.label, dropped = %later.label, "duplicate table key");
            }
            duplicate
        });
        let duplicates = before - entries.len();
        (Self { entries }, duplicates)
    }

    /// Parse a table resource. Blank lines are ignored; malformed records are
    /// skipped and reported in the returned [`LoadReport`].
    ///
    /// The last tab-separated field is the label. Everything before it,
    /// rejoined with tabs, is the name.
    pub fn parse(text: &str) -> LoadReport<LookupTable, TableError> {
        let mut records = Vec::new();
        let mut errors = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            match parse_record(line, line_no) {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping table record");
                    errors.push(err);
                }
            }
        }

        let (table, duplicates) = Self::build(records);
        tracing::info!(
            records = table.len(),
            duplicates,
            skipped = errors.len(),
            "lookup table parsed"
        );

        let mut report = LoadReport::new(table);
        for err in errors {
            report.add_error(err);
        }
        report
    }

    /// Exact lookup of an already-uppercased key.
    pub fn lookup(&self, key: &str) -> Option<GenderLabel> {
        self.entries
            .binary_search_by(|entry| entry.key.as_str().cmp(key))
            .ok()
            .map(|idx| self.entries[idx].label)
    }

    /// Lookup with case folding applied to `name` first.
    pub fn get(&self, name: &str) -> Option<GenderLabel> {
        self.lookup(&name.to_uppercase())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &TableEntry> {
        self.entries.iter()
    }

    /// Render as a table resource, one record per line in key order.
    pub fn to_tsv(&self) -> String {
        let mut out = String::with_capacity(self.entries.len() * 12);
        for entry in &self.entries {
            out.push_str(&entry.key);
            out.push(FIELD_SEPARATOR);
            out.push_str(entry.label.as_str());
            out.push('\n');
        }
        out
    }

    /// Number of entries per label. Every label is present, possibly zero.
    pub fn stats(&self) -> BTreeMap<GenderLabel, usize> {
        let mut counts: BTreeMap<GenderLabel, usize> =
            GenderLabel::ALL.iter().map(|&label| (label, 0)).collect();
        for entry in &self.entries {
            *counts.entry(entry.label).or_default() += 1;
        }
        counts
    }
}

fn parse_record(line: &str, line_no: usize) -> Result<(String, GenderLabel), TableError> {
    let Some((name, label)) = line.rsplit_once(FIELD_SEPARATOR) else {
        return Err(TableError::MalformedRecord {
            line: line_no,
            reason: "missing tab separator".to_string(),
        });
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(TableError::MalformedRecord {
            line: line_no,
            reason: "empty name".to_string(),
        });
    }
    let label = label
        .parse::<GenderLabel>()
        .map_err(|err| TableError::UnknownLabel {
            line: line_no,
            label: err.0,
        })?;
    Ok((name.to_string(), label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_lookup() {
        let report = LookupTable::parse("Ali\tM\nroberta\tF\nALEX\tUNI\n");
        assert!(report.is_clean());
        let table = report.into_data();
        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup("ALI"), Some(GenderLabel::Male));
        assert_eq!(table.lookup("ROBERTA"), Some(GenderLabel::Female));
        assert_eq!(table.get("alex"), Some(GenderLabel::Unisex));
        assert_eq!(table.lookup("Ali"), None);
        assert_eq!(table.lookup("BOB"), None);
    }

    #[test]
    fn first_seen_wins() {
        let table = LookupTable::parse("Sam\tM\nSAM\tF\nsam\tUNI\n").into_data();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("SAM"), Some(GenderLabel::Male));
    }

    #[test]
    fn tabbed_names_keep_all_but_last_field() {
        let table = LookupTable::parse("Mary\tJo\tF\n").into_data();
        assert_eq!(table.lookup("MARY\tJO"), Some(GenderLabel::Female));
    }

    #[test]
    fn malformed_records_are_skipped() {
        let report = LookupTable::parse("Ali\tM\nnolabel\n\tF\nBob\tMALE\n\nEve\tF\r\n");
        assert_eq!(report.error_count(), 3);
        assert_eq!(report.errors[0].line(), 2);
        assert!(matches!(report.errors[1], TableError::MalformedRecord { line: 3, .. }));
        assert_eq!(
            report.errors[2],
            TableError::UnknownLabel {
                line: 4,
                label: "MALE".to_string()
            }
        );
        let table = report.into_data();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("EVE"), Some(GenderLabel::Female));
    }

    #[test]
    fn tsv_is_sorted_and_reparses() {
        let table = LookupTable::from_records([
            ("zoe", GenderLabel::Female),
            ("ali", GenderLabel::Male),
        ]);
        let tsv = table.to_tsv();
        assert_eq!(tsv, "ALI\tM\nZOE\tF\n");
        assert_eq!(LookupTable::parse(&tsv).into_data(), table);
    }

    #[test]
    fn stats_cover_every_label() {
        let table = LookupTable::from_records([
            ("Ali", GenderLabel::Male),
            ("Bob", GenderLabel::Male),
            ("Alex", GenderLabel::Unisex),
        ]);
        let stats = table.stats();
        assert_eq!(stats.len(), 5);
        assert_eq!(stats[&GenderLabel::Male], 2);
        assert_eq!(stats[&GenderLabel::Unisex], 1);
        assert_eq!(stats[&GenderLabel::Female], 0);
    }

    #[test]
    fn empty_table() {
        let table = LookupTable::parse("").into_data();
        assert!(table.is_empty());
        assert_eq!(table.lookup("ALI"), None);
    }
}
