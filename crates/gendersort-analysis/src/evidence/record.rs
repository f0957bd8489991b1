//! One name's block in the evidence log.
//!
//! ```text
//! Ali
//! 1
//! Ali Smith
//! he=4 his=2 she=0 her=0
//! Ali = 1H 0F
//! 2020-03-01 12:00:00.000000
//! Ali = M
//! ```
//!
//! The first line is the name and the last line `<NAME> = <LABEL>`. The line
//! before the last carries the timestamp when the block has one. Everything
//! in between is free-form detail.

use chrono::NaiveDateTime;
use gendersort_core::errors::EvidenceError;
use gendersort_core::GenderLabel;
use serde::{Deserialize, Serialize};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub name: String,
    pub label: GenderLabel,
    pub recorded_at: Option<NaiveDateTime>,
    /// The full block text, kept verbatim for re-rendering.
    pub body: String,
}

impl EvidenceRecord {
    /// Build a record, rendering its block from `details`.
    pub fn new(
        name: &str,
        label: GenderLabel,
        recorded_at: NaiveDateTime,
        details: &[String],
    ) -> Self {
        let mut lines: Vec<String> = Vec::with_capacity(details.len() + 3);
        lines.push(name.to_string());
        lines.extend(details.iter().cloned());
        lines.push(format_timestamp(recorded_at));
        lines.push(format!("{name} = {label}"));
        Self {
            name: name.to_string(),
            label,
            recorded_at: Some(recorded_at),
            body: lines.join("\n"),
        }
    }

    /// Parse a single block. `index` is only used for error reporting.
    pub fn parse_block(block: &str, index: usize) -> Result<Self, EvidenceError> {
        let lines: Vec<&str> = block.split('\n').collect();
        if lines.len() < 2 {
            return Err(EvidenceError::MalformedBlock {
                index,
                reason: "fewer than two lines".to_string(),
            });
        }
        let last = lines[lines.len() - 1];
        let Some((_, label_text)) = last.rsplit_once('=') else {
            return Err(EvidenceError::MalformedBlock {
                index,
                reason: format!("no label line: '{last}'"),
            });
        };
        let label_text: String = label_text.chars().filter(|c| *c != ' ').collect();
        let label = label_text
            .parse::<GenderLabel>()
            .map_err(|err| EvidenceError::MalformedBlock {
                index,
                reason: err.to_string(),
            })?;
        Ok(Self {
            name: lines[0].to_string(),
            label,
            recorded_at: parse_timestamp(lines[lines.len() - 2]),
            body: block.to_string(),
        })
    }

    pub fn block(&self) -> &str {
        &self.body
    }
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(h: u32, micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 3, 1)
            .unwrap()
            .and_hms_micro_opt(h, 0, 0, micro)
            .unwrap()
    }

    #[test]
    fn new_renders_block() {
        let rec = EvidenceRecord::new(
            "Ali",
            GenderLabel::Male,
            at(12, 250),
            &["1".to_string(), "Ali = 1H 0F".to_string()],
        );
        assert_eq!(
            rec.block(),
            "Ali\n1\nAli = 1H 0F\n2020-03-01 12:00:00.000250\nAli = M"
        );
    }

    #[test]
    fn parse_reads_name_label_and_time() {
        let rec = EvidenceRecord::parse_block(
            "Ali\n1\nAli = 1H 0F\n2020-03-01 12:00:00.000250\nAli = M",
            0,
        )
        .unwrap();
        assert_eq!(rec.name, "Ali");
        assert_eq!(rec.label, GenderLabel::Male);
        assert_eq!(rec.recorded_at, Some(at(12, 250)));
    }

    #[test]
    fn timestamp_without_fraction() {
        let rec =
            EvidenceRecord::parse_block("Bea\n2020-03-01 09:00:00\nBea = F", 3).unwrap();
        assert_eq!(rec.recorded_at, Some(at(9, 0)));
    }

    #[test]
    fn missing_timestamp_is_none() {
        let rec = EvidenceRecord::parse_block("Bea\nBea =  UNI", 0).unwrap();
        assert_eq!(rec.label, GenderLabel::Unisex);
        assert_eq!(rec.recorded_at, None);
    }

    #[test]
    fn malformed_blocks() {
        assert!(matches!(
            EvidenceRecord::parse_block("Ali", 7),
            Err(EvidenceError::MalformedBlock { index: 7, .. })
        ));
        assert!(EvidenceRecord::parse_block("Ali\nAli is M", 0).is_err());
        assert!(EvidenceRecord::parse_block("Ali\nAli = MALE", 0).is_err());
    }
}
