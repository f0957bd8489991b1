//! The evidence log: one block per name, blocks separated by a blank line.
//!
//! Several partial runs may record the same name. Merging keeps the record
//! with the latest timestamp, so merging is idempotent and order-independent
//! except for exact timestamp ties, where the record seen first stays.

use std::collections::{BTreeMap, BTreeSet};

use gendersort_core::constants::BLOCK_SEPARATOR;
use gendersort_core::errors::{EvidenceError, LoadReport};
use gendersort_core::GenderLabel;

use super::record::EvidenceRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvidenceLog {
    records: BTreeMap<String, EvidenceRecord>,
}

/// Dataset rows in input order plus the names the log has no record for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub rows: Vec<(String, GenderLabel)>,
    pub missing: Vec<String>,
}

impl EvidenceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse log text. Empty blocks are ignored; malformed ones are skipped
    /// and reported. A block opening with a blank line belongs to the empty
    /// name.
    pub fn parse(text: &str) -> LoadReport<EvidenceLog, EvidenceError> {
        let mut report = LoadReport::new(EvidenceLog::new());
        for (index, block) in text.split(BLOCK_SEPARATOR).enumerate() {
            if block.trim().is_empty() {
                continue;
            }
            match EvidenceRecord::parse_block(block.trim_end_matches('\n'), index) {
                Ok(record) => {
                    report.data.insert(record);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "skipping evidence block");
                    report.add_error(err);
                }
            }
        }
        tracing::debug!(records = report.data.len(), skipped = report.error_count(), "evidence log parsed");
        report
    }

    /// Insert `record` unless a record for the same name is at least as
    /// recent. Records without a timestamp lose to timestamped ones.
    /// Returns true when `record` was stored.
    pub fn insert(&mut self, record: EvidenceRecord) -> bool {
        match self.records.get(&record.name) {
            Some(existing) if existing.recorded_at >= record.recorded_at => false,
            _ => {
                self.records.insert(record.name.clone(), record);
                true
            }
        }
    }

    pub fn merge(&mut self, other: EvidenceLog) {
        for record in other.records.into_values() {
            self.insert(record);
        }
    }

    pub fn get(&self, name: &str) -> Option<&EvidenceRecord> {
        self.records.get(name)
    }

    pub fn label(&self, name: &str) -> Option<GenderLabel> {
        self.get(name).map(|r| r.label)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &EvidenceRecord> {
        self.records.values()
    }

    /// Blocks in name order, joined by a blank line.
    pub fn render(&self) -> String {
        self.records
            .values()
            .map(EvidenceRecord::block)
            .collect::<Vec<_>>()
            .join(BLOCK_SEPARATOR)
    }

    /// Sorted distinct names that still need evidence. Empty names are
    /// ignored.
    pub fn pending<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| !name.is_empty() && !self.contains(name))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// `(name, label)` for every name the log knows, in input order.
    pub fn dataset<S: AsRef<str>>(&self, names: &[S]) -> Dataset {
        let mut dataset = Dataset::default();
        for name in names.iter().map(AsRef::as_ref) {
            match self.label(name) {
                Some(label) => dataset.rows.push((name.to_string(), label)),
                None => dataset.missing.push(name.to_string()),
            }
        }
        dataset
    }
}

impl Extend<EvidenceRecord> for EvidenceLog {
    fn extend<T: IntoIterator<Item = EvidenceRecord>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<EvidenceRecord> for EvidenceLog {
    fn from_iter<T: IntoIterator<Item = EvidenceRecord>>(iter: T) -> Self {
        let mut log = EvidenceLog::new();
        log.extend(iter);
        log
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 3, day)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn rec(name: &str, label: GenderLabel, day: u32) -> EvidenceRecord {
        EvidenceRecord::new(name, label, at(day), &[])
    }

    #[test]
    fn latest_timestamp_wins() {
        let mut log = EvidenceLog::new();
        assert!(log.insert(rec("Ali", GenderLabel::Unknown, 1)));
        assert!(log.insert(rec("Ali", GenderLabel::Male, 3)));
        assert!(!log.insert(rec("Ali", GenderLabel::Female, 2)));
        assert_eq!(log.label("Ali"), Some(GenderLabel::Male));
    }

    #[test]
    fn ties_keep_first_seen() {
        let mut log = EvidenceLog::new();
        log.insert(rec("Ali", GenderLabel::Male, 1));
        assert!(!log.insert(rec("Ali", GenderLabel::Female, 1)));
        assert_eq!(log.label("Ali"), Some(GenderLabel::Male));
    }

    #[test]
    fn untimed_record_loses() {
        let untimed = EvidenceRecord::parse_block("Ali\nAli = F", 0).unwrap();
        let mut log: EvidenceLog = [rec("Ali", GenderLabel::Male, 1)].into_iter().collect();
        assert!(!log.insert(untimed.clone()));
        let mut other = EvidenceLog::new();
        other.insert(untimed);
        other.insert(rec("Ali", GenderLabel::Male, 1));
        assert_eq!(other.label("Ali"), Some(GenderLabel::Male));
        log.merge(other);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn merge_is_order_independent() {
        let a: EvidenceLog = [rec("Ali", GenderLabel::Male, 2), rec("Bea", GenderLabel::Unknown, 1)]
            .into_iter()
            .collect();
        let b: EvidenceLog = [rec("Bea", GenderLabel::Female, 4), rec("Cy", GenderLabel::Unisex, 1)]
            .into_iter()
            .collect();
        let mut ab = a.clone();
        ab.merge(b.clone());
        let mut ba = b;
        ba.merge(a);
        assert_eq!(ab, ba);
        assert_eq!(ab.label("Bea"), Some(GenderLabel::Female));
    }

    #[test]
    fn parse_render_parse() {
        let text = "Bea\n2020-03-01 08:00:00\nBea = F\n\nAli\n1\n2020-03-02 08:00:00\nAli = M\n\n\n\nbroken\n";
        let report = EvidenceLog::parse(text);
        assert_eq!(report.error_count(), 1);
        let log = report.into_data();
        assert_eq!(log.len(), 2);
        let rendered = log.render();
        assert!(rendered.starts_with("Ali\n"));
        assert_eq!(EvidenceLog::parse(&rendered).into_data(), log);
    }

    #[test]
    fn empty_name_survives_render_and_parse() {
        let empty = EvidenceRecord::new("", GenderLabel::Initials, at(1), &["name is empty".to_string()]);
        let log: EvidenceLog = [empty, rec("Ali", GenderLabel::Male, 2)].into_iter().collect();
        let rendered = log.render();
        assert!(rendered.starts_with("\nname is empty\n"));
        let back = EvidenceLog::parse(&rendered).into_data();
        assert_eq!(back, log);
        assert_eq!(back.label(""), Some(GenderLabel::Initials));
        assert!(!back.contains("name is empty"));
    }

    #[test]
    fn blank_line_after_separator_is_empty_name() {
        let text = "Ali\n2020-03-02 08:00:00\nAli = M\n\n\nname is empty\n2020-03-01 08:00:00\n = INI\n";
        let report = EvidenceLog::parse(text);
        assert_eq!(report.error_count(), 0);
        let log = report.into_data();
        let names: Vec<&str> = log.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["", "Ali"]);
        assert_eq!(log.dataset(&["", "Ali"]).missing, Vec::<String>::new());
    }

    #[test]
    fn pending_names() {
        let log: EvidenceLog = [rec("Ali", GenderLabel::Male, 1)].into_iter().collect();
        let pending = log.pending(&["Zoe", "Ali", "", "Bea", "Zoe"]);
        assert_eq!(pending, ["Bea", "Zoe"]);
    }

    #[test]
    fn dataset_keeps_input_order() {
        let log: EvidenceLog = [rec("Ali", GenderLabel::Male, 1), rec("Bea", GenderLabel::Female, 1)]
            .into_iter()
            .collect();
        let dataset = log.dataset(&["Bea", "Cy", "Ali", "Bea"]);
        assert_eq!(
            dataset.rows,
            [
                ("Bea".to_string(), GenderLabel::Female),
                ("Ali".to_string(), GenderLabel::Male),
                ("Bea".to_string(), GenderLabel::Female),
            ]
        );
        assert_eq!(dataset.missing, ["Cy"]);
    }
}
