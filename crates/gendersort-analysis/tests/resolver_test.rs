//! End-to-end resolution against a parsed table resource.

use std::sync::Arc;

use gendersort_analysis::evidence::{EvidenceLog, EvidenceRecord};
use gendersort_analysis::{normalize, BatchResolver, GenderResolver, LookupTable};
use gendersort_core::GenderLabel;

const TABLE: &str = "\
ALI\tM
ROBERTA\tF
FRANCOIS\tM
ALEX\tUNI
MARIE\tF
SMITH\tUNK
JEAN\tM
";

fn resolver() -> GenderResolver {
    let report = LookupTable::parse(TABLE);
    assert!(report.is_clean());
    GenderResolver::new(Arc::new(report.into_data()))
}

fn texts(name: &str) -> Vec<String> {
    normalize(name).iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_main_name_beats_alternate() {
    assert_eq!(resolver().assign_label("Ali (Roberta) Smith"), GenderLabel::Male);
    assert_eq!(resolver().assign_label("Smith (Roberta) Ali"), GenderLabel::Male);
    assert_eq!(resolver().assign_label("Smith \"Roberta\""), GenderLabel::Female);
}

#[test]
fn test_normalizer_examples() {
    assert_eq!(texts("Ali"), ["Ali"]);
    assert_eq!(texts("SmithJ."), ["Smith"]);
    assert_eq!(texts("John-Paul"), ["John-Paul", "John", "Paul"]);
    assert!(texts("J.R.").is_empty());
}

#[test]
fn test_initials_resolve_to_ini() {
    let r = resolver();
    assert_eq!(r.assign_label("J.R."), GenderLabel::Initials);
    assert_eq!(r.assign_label("NULL"), GenderLabel::Initials);
}

#[test]
fn test_diacritic_fallback() {
    assert_eq!(resolver().assign_label("François"), GenderLabel::Male);
    assert_eq!(resolver().assign_label("FRANÇOIS DUPONT"), GenderLabel::Male);
}

#[test]
fn test_unisex_override() {
    let res = resolver().assign("Alex Marie");
    assert_eq!(res.label, GenderLabel::Female);
    assert_eq!(resolver().assign_label("Alex Doe"), GenderLabel::Unisex);
}

#[test]
fn test_unmatched_tokens_feed_back() {
    let res = resolver().assign("Zoë Jean");
    assert_eq!(res.label, GenderLabel::Male);
    let unmatched: Vec<&str> = res.unmatched.iter().map(|t| t.as_str()).collect();
    assert_eq!(unmatched, ["Zoë", "Zoe"]);
}

#[test]
fn test_resolution_serializes() {
    let res = resolver().assign("Qwerty Ali");
    let json = serde_json::to_value(&res).unwrap();
    assert_eq!(json["label"], "M");
    assert_eq!(json["matched"], "Ali");
    assert_eq!(json["unmatched"][0], "Qwerty");
}

#[test]
fn test_resolver_shared_across_threads() {
    let r = resolver();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let r = r.clone();
            std::thread::spawn(move || r.assign_label("Roberta"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), GenderLabel::Female);
    }
}

#[test]
fn test_batch_then_dataset_from_log() {
    let outcome = BatchResolver::new(resolver()).assign_all(&["Ali", "Nobody Here", "J."]);
    assert_eq!(outcome.render_output(), "Ali\tM\nNobody Here\tUNK\nJ.\tINI\n");
    assert_eq!(outcome.render_unknown(), "Here\nNobody\n");

    let at = chrono::NaiveDate::from_ymd_opt(2022, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let log: EvidenceLog = outcome
        .unknown
        .iter()
        .map(|name| EvidenceRecord::new(name, GenderLabel::Unisex, at, &[]))
        .collect();
    let dataset = log.dataset(&["Nobody", "Here"]);
    assert_eq!(dataset.rows.len(), 2);
    assert!(dataset.missing.is_empty());
}
