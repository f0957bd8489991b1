//! Evidence collection against an external encyclopedia-like service.
//!
//! Round one searches for the name's first part, keeps titles that look like
//! `<Name> <Surname>`, and tallies pronoun cues in each page summary.
//! Disambiguation pages contribute related titles to the queue. If round
//! one leaves the name `UNK`, round two tallies listing cues over the
//! concatenated search titles. Votes carry over between rounds.

use std::collections::VecDeque;
use std::fmt;

use chrono::NaiveDateTime;
use gendersort_core::config::EvidenceConfig;
use gendersort_core::constants::{DEFAULT_DOMINANCE_RATIO, DEFAULT_MAX_VOTES};
use gendersort_core::GenderLabel;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use super::cues::{CueCounts, CueSet};
use super::precheck::{is_candidate_title, is_related_title, precheck, search_key};
use super::record::{format_timestamp, EvidenceRecord};
use super::tally::EvidenceTally;

/// Related titles taken from one disambiguation page.
const MAX_DISAMBIGUATION_OPTIONS: usize = 20;

/// What the service returned for a page title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSummary {
    Text(String),
    Disambiguation(Vec<String>),
    Missing,
}

/// The remote service. Implementations own retries and rate limiting.
pub trait EvidenceSource: Sync {
    type Error: fmt::Display;

    /// Page titles matching `query`, in the service's ranking order.
    fn search(&self, query: &str) -> Result<Vec<String>, Self::Error>;

    fn summary(&self, title: &str) -> Result<PageSummary, Self::Error>;
}

pub struct EvidenceCollector<S> {
    source: S,
    max_votes: u32,
    dominance_ratio: u32,
}

impl<S: EvidenceSource> EvidenceCollector<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_votes: DEFAULT_MAX_VOTES,
            dominance_ratio: DEFAULT_DOMINANCE_RATIO,
        }
    }

    pub fn from_config(source: S, config: &EvidenceConfig) -> Self {
        Self {
            source,
            max_votes: config.effective_max_votes(),
            dominance_ratio: config.effective_dominance_ratio(),
        }
    }

    /// Gather evidence for `name` and render its log record, stamped `at`.
    pub fn collect(&self, name: &str, at: NaiveDateTime) -> EvidenceRecord {
        if let Some(outcome) = precheck(name) {
            return EvidenceRecord::new(name, outcome.label(), at, &[outcome.reason().to_string()]);
        }
        let Some(key) = search_key(name) else {
            return EvidenceRecord::new(name, GenderLabel::Unknown, at, &[]);
        };

        let mut details = Vec::new();
        let mut tally = EvidenceTally::new(self.max_votes);
        let mut label = GenderLabel::Unknown;

        for (round, cues) in [CueSet::Pronouns, CueSet::Listing].into_iter().enumerate() {
            if round > 0 {
                details.push(format_timestamp(at));
                details.push(format!("{name} = {label}"));
            }
            details.push((round + 1).to_string());
            match cues {
                CueSet::Pronouns => self.person_round(&key, &mut tally, &mut details),
                CueSet::Listing => self.listing_round(&key, &mut tally, &mut details),
            }
            label = tally.label(self.dominance_ratio);
            details.push(format!("{name} = {tally}"));
            if label != GenderLabel::Unknown {
                break;
            }
        }

        tracing::debug!(input = name, %label, male = tally.male, female = tally.female, "evidence collected");
        EvidenceRecord::new(name, label, at, &details)
    }

    /// Collect for many names in parallel. Output order follows `names`.
    pub fn collect_all<N>(&self, names: &[N], at: NaiveDateTime) -> Vec<EvidenceRecord>
    where
        N: AsRef<str> + Sync,
    {
        names
            .par_iter()
            .map(|name| self.collect(name.as_ref(), at))
            .collect()
    }

    fn person_round(&self, key: &str, tally: &mut EvidenceTally, details: &mut Vec<String>) {
        let titles = match self.source.search(key) {
            Ok(titles) => titles,
            Err(err) => {
                tracing::warn!(key, error = %err, "search failed");
                return;
            }
        };

        let mut queue: VecDeque<String> = titles
            .into_iter()
            .filter(|t| is_candidate_title(t, key))
            .collect();
        let mut seen: FxHashSet<String> = queue.iter().cloned().collect();
        let mut backlog: VecDeque<String> = VecDeque::new();

        while !tally.is_saturated() {
            let Some(title) = queue.pop_front().or_else(|| backlog.pop_front()) else {
                break;
            };
            match self.source.summary(&title) {
                Ok(PageSummary::Text(text)) => {
                    let counts = CueCounts::scan(&text, CueSet::Pronouns);
                    details.push(title);
                    details.push(counts.to_string());
                    tally.add(counts.verdict(self.dominance_ratio));
                }
                Ok(PageSummary::Disambiguation(options)) => {
                    details.push(format!("{title} - DISAMBIGUATION"));
                    let related: Vec<String> = options
                        .into_iter()
                        .filter(|o| is_related_title(o, key) && !seen.contains(o))
                        .take(MAX_DISAMBIGUATION_OPTIONS)
                        .collect();
                    let mut related = related.into_iter();
                    if let Some(first) = related.next() {
                        seen.insert(first.clone());
                        queue.push_front(first);
                    }
                    for option in related {
                        if seen.insert(option.clone()) {
                            backlog.push_back(option);
                        }
                    }
                }
                Ok(PageSummary::Missing) => details.push(format!("{title} - MISSING")),
                Err(err) => {
                    tracing::warn!(title = %title, error = %err, "summary failed");
                    details.push(format!("{title} - ERROR"));
                }
            }
        }
    }

    fn listing_round(&self, key: &str, tally: &mut EvidenceTally, details: &mut Vec<String>) {
        match self.source.search(key) {
            Ok(titles) => {
                let counts = CueCounts::scan(&titles.concat(), CueSet::Listing);
                details.push(counts.to_string());
                tally.add(counts.verdict(self.dominance_ratio));
            }
            Err(err) => tracing::warn!(key, error = %err, "listing search failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::NaiveDate;

    use super::*;

    #[derive(Default)]
    struct FakeSource {
        search: HashMap<String, Vec<String>>,
        pages: HashMap<String, PageSummary>,
    }

    impl FakeSource {
        fn with_search(mut self, query: &str, titles: &[&str]) -> Self {
            self.search
                .insert(query.into(), titles.iter().map(|t| t.to_string()).collect());
            self
        }

        fn with_page(mut self, title: &str, page: PageSummary) -> Self {
            self.pages.insert(title.into(), page);
            self
        }
    }

    impl EvidenceSource for FakeSource {
        type Error = String;

        fn search(&self, query: &str) -> Result<Vec<String>, String> {
            self.search
                .get(query)
                .cloned()
                .ok_or_else(|| format!("no results for {query}"))
        }

        fn summary(&self, title: &str) -> Result<PageSummary, String> {
            Ok(self.pages.get(title).cloned().unwrap_or(PageSummary::Missing))
        }
    }

    fn text(s: &str) -> PageSummary {
        PageSummary::Text(s.to_string())
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 5, 4)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn initials_skip_the_service() {
        let collector = EvidenceCollector::new(FakeSource::default());
        let rec = collector.collect("J.", now());
        assert_eq!(rec.label, GenderLabel::Initials);
        assert_eq!(
            rec.block(),
            "J.\nname is initials\n2021-05-04 10:00:00.000000\nJ. = INI"
        );
    }

    #[test]
    fn pronoun_votes_decide() {
        let source = FakeSource::default()
            .with_search("Ali", &["Ali", "Ali Smith", "Ali Jones", "Alibaba"])
            .with_page("Ali Smith", text("Smith is a poet. He wrote his books"))
            .with_page("Ali Jones", text("Jones is a chef and he cooks"));
        let rec = EvidenceCollector::new(source).collect("ali-reza", now());
        assert_eq!(rec.label, GenderLabel::Male);
        assert!(rec.block().contains("Ali Smith\nhe=1 his=1 she=0 her=0"));
        assert!(rec.block().contains("ali-reza = 2H 0F"));
        assert!(rec.block().ends_with("ali-reza = M"));
    }

    #[test]
    fn disambiguation_options_are_followed() {
        let source = FakeSource::default()
            .with_search("Sam", &["Sam Lee"])
            .with_page(
                "Sam Lee",
                PageSummary::Disambiguation(vec!["Sam Lee (singer)".into(), "Other".into()]),
            )
            .with_page("Sam Lee (singer)", text("Lee is a singer. She tours and her songs"));
        let rec = EvidenceCollector::new(source).collect("Sam", now());
        assert_eq!(rec.label, GenderLabel::Female);
        assert!(rec.block().contains("Sam Lee - DISAMBIGUATION"));
    }

    #[test]
    fn listing_round_runs_when_pages_are_silent() {
        let source = FakeSource::default()
            .with_search("Kim", &["Kim Park", "List of female athletes", "Kim (given name)"])
            .with_page("Kim Park", text("Park is an athlete"));
        let rec = EvidenceCollector::new(source).collect("Kim", now());
        assert_eq!(rec.label, GenderLabel::Female);
        let block = rec.block();
        assert!(block.contains("Kim = UNK\n2\nmen=0 male=0 women=0 female=1"));
    }

    #[test]
    fn unreachable_service_yields_unknown() {
        let rec = EvidenceCollector::new(FakeSource::default()).collect("Ali", now());
        assert_eq!(rec.label, GenderLabel::Unknown);
        assert!(rec.block().ends_with("Ali = UNK"));
    }

    #[test]
    fn votes_stop_at_the_limit() {
        let source = FakeSource::default()
            .with_search("Bo", &["Bo A", "Bo B", "Bo C"])
            .with_page("Bo A", text("x he x"))
            .with_page("Bo B", text("x she x"))
            .with_page("Bo C", text("x she x"));
        let config = EvidenceConfig {
            max_votes: Some(2),
            ..Default::default()
        };
        let rec = EvidenceCollector::from_config(source, &config).collect("Bo", now());
        assert_eq!(rec.label, GenderLabel::Unisex);
        assert!(!rec.block().contains("Bo C"));
    }

    #[test]
    fn collect_all_keeps_order() {
        let collector = EvidenceCollector::new(FakeSource::default());
        let recs = collector.collect_all(&["Zed", "", "Ali"], now());
        let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Zed", "", "Ali"]);
        assert_eq!(recs[1].label, GenderLabel::Initials);
    }
}
