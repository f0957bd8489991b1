//! Character classes and casing used by the normalizers.
//!
//! Alphabetic and vowel tests are diacritic-insensitive: `é` is a vowel,
//! `ç` is a letter.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const VOWELS: &str = "aeiouyAEIOUY";

/// Letters with no canonical decomposition that still have an obvious
/// ASCII spelling.
fn ascii_spelling(c: char) -> Option<&'static str> {
    Some(match c {
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "AE",
        'ø' => "o",
        'Ø' => "O",
        'œ' => "oe",
        'Œ' => "OE",
        'ł' => "l",
        'Ł' => "L",
        'đ' | 'ð' => "d",
        'Đ' | 'Ð' => "D",
        'þ' => "th",
        'Þ' => "TH",
        'ı' => "i",
        _ => return None,
    })
}

/// Strip diacritics: NFD, drop combining marks, spell out the few letters
/// that do not decompose.
pub fn fold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        match ascii_spelling(c) {
            Some(spelled) => out.push_str(spelled),
            None => out.push(c),
        }
    }
    out
}

#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_alphabetic()
}

pub fn is_vowel(c: char) -> bool {
    let mut buf = [0u8; 4];
    fold(c.encode_utf8(&mut buf))
        .chars()
        .any(|f| VOWELS.contains(f))
}

pub fn count_alpha(s: &str) -> usize {
    s.chars().filter(|&c| is_alpha(c)).count()
}

pub fn count_vowels(s: &str) -> usize {
    s.chars().filter(|&c| is_vowel(c)).count()
}

/// First character uppercase, the rest lowercase.
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Capitalize each hyphen-delimited segment: `JOHN-PAUL` -> `John-Paul`.
pub fn capitalize(fragment: &str) -> String {
    fragment
        .split('-')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join("-")
}
