//! General-purpose normalizer for free-form names.

use super::chars::{count_alpha, is_alpha};
use super::fragments::{deprioritize_abbreviations, finalize};
use super::reorder::{reorder_alternates, QuotePairing};
use super::TokenList;

/// Letters, `.` and `-` survive; everything else separates fragments.
fn split_fragments(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| if is_alpha(c) || c == '.' || c == '-' { c } else { ' ' })
        .collect();
    cleaned
        .split_whitespace()
        .filter(|f| count_alpha(f) > 0)
        .map(str::to_string)
        .collect()
}

/// `A.Carl` -> `A`, `Carl`, in place.
fn resplit_periods(fragments: Vec<String>) -> Vec<String> {
    fragments
        .into_iter()
        .flat_map(|f| {
            if f.contains('.') {
                f.split('.')
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            } else {
                vec![f]
            }
        })
        .collect()
}

/// `John-Paul` -> `John-Paul`, `John`, `Paul`.
fn expand_hyphens(fragments: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        let trimmed = fragment.trim_matches('-');
        if trimmed.is_empty() {
            continue;
        }
        out.push(trimmed.to_string());
        if trimmed.contains('-') {
            out.extend(
                trimmed
                    .split('-')
                    .filter(|p| !p.is_empty())
                    .map(str::to_string),
            );
        }
    }
    out
}

pub fn normalize_general(name: &str) -> TokenList {
    let text = reorder_alternates(name, QuotePairing::Adjacent);
    let fragments = split_fragments(&text);
    let fragments = deprioritize_abbreviations(fragments);
    let fragments = resplit_periods(fragments);
    let fragments = expand_hyphens(fragments);
    finalize(fragments)
}
