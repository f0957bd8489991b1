//! Running vote tally for one name.

use std::fmt;

use gendersort_core::GenderLabel;

use super::cues::Vote;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvidenceTally {
    pub male: u32,
    pub female: u32,
    max_votes: u32,
}

impl EvidenceTally {
    pub fn new(max_votes: u32) -> Self {
        Self {
            male: 0,
            female: 0,
            max_votes,
        }
    }

    pub fn votes(&self) -> u32 {
        self.male + self.female
    }

    /// No more pages are needed once `max_votes` have been cast.
    pub fn is_saturated(&self) -> bool {
        self.votes() >= self.max_votes
    }

    /// Record a page verdict. Returns false when the tally is already
    /// saturated and the vote was dropped.
    pub fn add(&mut self, vote: Option<Vote>) -> bool {
        if self.is_saturated() {
            return false;
        }
        match vote {
            Some(Vote::Male) => self.male += 1,
            Some(Vote::Female) => self.female += 1,
            None => {}
        }
        true
    }

    /// `M`/`F` when one side holds at least `ratio` times the other's votes,
    /// `UNI` for any other non-empty tally, `UNK` without votes.
    pub fn label(&self, ratio: u32) -> GenderLabel {
        let (m, f) = (self.male, self.female);
        if m > 0 && m >= ratio.saturating_mul(f) {
            GenderLabel::Male
        } else if f > 0 && f >= ratio.saturating_mul(m) {
            GenderLabel::Female
        } else if m + f > 0 {
            GenderLabel::Unisex
        } else {
            GenderLabel::Unknown
        }
    }
}

impl fmt::Display for EvidenceTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}H {}F", self.male, self.female)
    }
}
