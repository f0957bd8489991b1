//! Token normalizer.
//!
//! Turns a raw name field into an ordered list of candidate tokens, best
//! candidate first. Parenthetical and quoted alternates go last, abbreviated
//! words follow full words, initials are dropped, and any token carrying
//! diacritics is followed by its folded ASCII form.

mod bibliographic;
pub mod chars;
mod fragments;
mod general;
pub mod reorder;

use std::fmt;

use gendersort_core::NormalizerVariant;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A cleaned candidate name: at least two letters and one vowel, with
/// first-upper-rest-lower casing per hyphen segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key used against the lookup table.
    pub fn lookup_key(&self) -> String {
        self.0.to_uppercase()
    }

    /// Diacritic-free variant of [`Token::lookup_key`].
    pub fn folded_key(&self) -> String {
        chars::fold(&self.lookup_key())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Tokens in priority order. Most names produce fewer than six.
pub type TokenList = SmallVec<[Token; 6]>;

/// Normalize with the general variant.
pub fn normalize(name: &str) -> TokenList {
    general::normalize_general(name)
}

pub fn normalize_with(name: &str, variant: NormalizerVariant) -> TokenList {
    match variant {
        NormalizerVariant::General => general::normalize_general(name),
        NormalizerVariant::Bibliographic => bibliographic::normalize_bibliographic(name),
    }
}
