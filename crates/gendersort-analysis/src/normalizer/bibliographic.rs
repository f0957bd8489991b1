//! Normalizer for listing-style name fields of bibliographic records.
//!
//! Only whitespace, hyphens and underscores separate fragments. There is no
//! period resplitting and no hyphen duplication.

use super::chars::count_alpha;
use super::fragments::{deprioritize_abbreviations, finalize};
use super::reorder::{reorder_alternates, QuotePairing};
use super::TokenList;

fn split_fragments(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|f| count_alpha(f) > 0)
        .map(str::to_string)
        .collect()
}

pub fn normalize_bibliographic(name: &str) -> TokenList {
    let text = reorder_alternates(name, QuotePairing::Outermost);
    let fragments = split_fragments(&text);
    let fragments = deprioritize_abbreviations(fragments);
    finalize(fragments)
}
