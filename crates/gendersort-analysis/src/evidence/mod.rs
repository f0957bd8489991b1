//! Evidence tallying and the evidence log.
//!
//! The decision rules that turn encyclopedia pages into table labels, plus
//! the log format those decisions are recorded in. Talking to the actual
//! service is left to an [`EvidenceSource`] implementation.

pub mod collector;
pub mod cues;
pub mod log;
pub mod precheck;
pub mod record;
pub mod tally;

pub use collector::{EvidenceCollector, EvidenceSource, PageSummary};
pub use cues::{CueCounts, CueSet, Vote};
pub use log::{Dataset, EvidenceLog};
pub use precheck::{is_candidate_title, precheck, search_key, Precheck};
pub use record::EvidenceRecord;
pub use tally::EvidenceTally;
