//! Gendered cue words and per-page vote verdicts.

use std::fmt;

/// Which pair of cue words to count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueSet {
    /// `he`/`his` vs `she`/`her`, counted in a person page summary.
    Pronouns,
    /// `men`/`male` vs `women`/`female`, counted in a concatenated search
    /// listing.
    Listing,
}

impl CueSet {
    /// Male cues followed by female cues.
    pub fn words(self) -> ([&'static str; 2], [&'static str; 2]) {
        match self {
            Self::Pronouns => (["he", "his"], ["she", "her"]),
            Self::Listing => (["men", "male"], ["women", "female"]),
        }
    }
}

/// A page's vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Male,
    Female,
}

/// Occurrences of each cue word in one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueCounts {
    pub cues: CueSet,
    pub male: [usize; 2],
    pub female: [usize; 2],
}

impl CueCounts {
    /// Count space-delimited cue words. The text is lowercased and newlines,
    /// parentheses, commas, periods and apostrophes become spaces. Matches do
    /// not overlap, so `" he he "` counts one `he`.
    pub fn scan(text: &str, cues: CueSet) -> Self {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .map(|c| match c {
                '\n' | '(' | ')' | ',' | '.' | '\'' => ' ',
                other => other,
            })
            .collect();
        let count = |word: &str| cleaned.matches(&format!(" {word} ")).count();
        let (male, female) = cues.words();
        Self {
            cues,
            male: male.map(count),
            female: female.map(count),
        }
    }

    pub fn male_total(&self) -> usize {
        self.male.iter().sum()
    }

    pub fn female_total(&self) -> usize {
        self.female.iter().sum()
    }

    /// One side votes when it has cues and at least `ratio` times the other.
    pub fn verdict(&self, ratio: u32) -> Option<Vote> {
        let (m, f) = (self.male_total(), self.female_total());
        let ratio = ratio as usize;
        if m > 0 && m >= ratio * f {
            Some(Vote::Male)
        } else if f > 0 && f >= ratio * m {
            Some(Vote::Female)
        } else {
            None
        }
    }
}

impl fmt::Display for CueCounts {
    /// `he=3 his=1 she=0 her=0`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (male, female) = self.cues.words();
        write!(
            f,
            "{}={} {}={} {}={} {}={}",
            male[0], self.male[0], male[1], self.male[1], female[0], self.female[0], female[1],
            self.female[1]
        )
    }
}
