//! Moves parenthetical and quoted alternates to the end of a name.
//!
//! Each pass finds one enclosed span, cuts it out, and appends its content
//! to the end of the working text. A pass removes exactly two delimiter
//! characters, so the loop ends after at most `delimiters / 2` passes.
//! Nested spans come out naturally: `A (B (C))` first yields `A  B (C)`,
//! then `A  B   C`.

/// Byte offsets of the two delimiters enclosing an alternate segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub open: usize,
    pub close: usize,
}

/// How double quotes pair up into a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotePairing {
    /// The first two quotes.
    Adjacent,
    /// The first and the last quote.
    Outermost,
}

/// Find the next span to relocate.
///
/// Parentheses win over quotes: the outermost pair from the first `(` to
/// the last `)`. Otherwise a pair of double quotes chosen by `quotes`.
pub fn find_enclosed_span(text: &str, quotes: QuotePairing) -> Option<Span> {
    if let (Some(open), Some(close)) = (text.find('('), text.rfind(')')) {
        if open < close {
            return Some(Span { open, close });
        }
    }
    let open = text.find('"')?;
    let close = match quotes {
        QuotePairing::Adjacent => open + 1 + text[open + 1..].find('"')?,
        QuotePairing::Outermost => text.rfind('"').filter(|close| *close > open)?,
    };
    Some(Span { open, close })
}

/// Cut `span` out of `text` and append its content at the end.
pub fn relocate(text: &str, span: Span) -> String {
    let Span { open, close } = span;
    format!(
        "{} {} {}",
        &text[..open],
        &text[close + 1..],
        &text[open + 1..close]
    )
}

/// Relocate spans until none remain.
pub fn reorder_alternates(name: &str, quotes: QuotePairing) -> String {
    let mut text = name.to_string();
    while let Some(span) = find_enclosed_span(&text, quotes) {
        text = relocate(&text, span);
    }
    text
}
