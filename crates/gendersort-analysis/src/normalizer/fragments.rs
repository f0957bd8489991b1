//! Fragment passes shared by both normalizer variants.

use super::chars::{capitalize, count_alpha, count_vowels, fold};
use super::{Token, TokenList};

/// `SmithJ.` -> (`Smith`, `J.`): a lowercase letter followed by a capital
/// and a final period reads as an initial fused to the previous word.
fn split_fused_initial(fragment: &str) -> Option<(String, String)> {
    let chars: Vec<char> = fragment.chars().collect();
    let n = chars.len();
    if n >= 4 && chars[n - 1] == '.' && chars[n - 2].is_uppercase() && chars[n - 3].is_lowercase()
    {
        let head = chars[..n - 2].iter().collect();
        let tail = chars[n - 2..].iter().collect();
        return Some((head, tail));
    }
    None
}

/// Split fused initials and push abbreviated fragments to the back.
///
/// A fragment ending in `.` loses the period and moves to the end of the
/// sequence. Moved fragments are visited again, so `A..` settles as `A`.
pub fn deprioritize_abbreviations(mut fragments: Vec<String>) -> Vec<String> {
    let mut j = 0;
    while j < fragments.len() {
        if let Some((head, tail)) = split_fused_initial(&fragments[j]) {
            fragments[j] = head;
            fragments.insert(j + 1, tail);
        }
        let fragment = &fragments[j];
        if fragment.ends_with('.') && fragment.chars().count() > 1 {
            let stripped = fragment[..fragment.len() - 1].to_string();
            fragments.remove(j);
            fragments.push(stripped);
            continue;
        }
        j += 1;
    }
    fragments
}

/// Drop initials, fix casing, and add the ASCII fallback after any token
/// carrying diacritics.
pub fn finalize(fragments: Vec<String>) -> TokenList {
    let mut tokens = TokenList::new();
    for fragment in fragments {
        if count_alpha(&fragment) <= 1 || count_vowels(&fragment) == 0 {
            continue;
        }
        let text = if fragment.chars().count() <= 1 {
            fragment.to_uppercase()
        } else {
            capitalize(&fragment)
        };
        let folded = fold(&text);
        let keep_folded =
            folded != text && count_alpha(&folded) > 1 && count_vowels(&folded) > 0;
        tokens.push(Token::new(text));
        if keep_folded {
            tokens.push(Token::new(folded));
        }
    }
    tokens
}
