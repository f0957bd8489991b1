//! Input screening and search-term helpers used before any lookup.

use gendersort_core::constants::NULL_NAME;
use gendersort_core::GenderLabel;

use crate::normalizer::chars::{capitalize_word, count_alpha, count_vowels};

/// Why a name was settled without collecting evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precheck {
    Empty,
    Initials,
}

impl Precheck {
    pub fn label(self) -> GenderLabel {
        GenderLabel::Initials
    }

    /// Reason line written to the evidence log.
    pub fn reason(self) -> &'static str {
        match self {
            Self::Empty => "name is empty",
            Self::Initials => "name is initials",
        }
    }
}

pub fn precheck(name: &str) -> Option<Precheck> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NULL_NAME) {
        Some(Precheck::Empty)
    } else if count_alpha(name) <= 1 || count_vowels(name) == 0 {
        Some(Precheck::Initials)
    } else {
        None
    }
}

/// First whitespace- or hyphen-delimited part of `name`, capitalized.
pub fn search_key(name: &str) -> Option<String> {
    name.split(|c: char| c.is_whitespace() || c == '-')
        .find(|part| !part.is_empty())
        .map(|part| {
            if part.chars().count() == 1 {
                part.to_uppercase()
            } else {
                capitalize_word(part)
            }
        })
}

/// A page title about a person bearing `key` as a first name: `key`, a space,
/// then an uppercase letter.
pub fn is_candidate_title(title: &str, key: &str) -> bool {
    title
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix(' '))
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_uppercase)
}

/// A disambiguation option worth following: a candidate title, a title
/// ending in ` key`, or one containing ` key (`.
pub fn is_related_title(title: &str, key: &str) -> bool {
    is_candidate_title(title, key)
        || title.ends_with(&format!(" {key}"))
        || title.contains(&format!(" {key} ("))
}
