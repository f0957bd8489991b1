//! Evidence aggregation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DOMINANCE_RATIO, DEFAULT_LOG_FILE, DEFAULT_MAX_VOTES, DEFAULT_NAMES_FILE,
    DEFAULT_TABLE_FILE,
};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EvidenceConfig {
    /// Evidence log. Default: `NamesLog.txt`.
    pub log_file: Option<String>,
    /// Names to aggregate evidence for. Default: `Names.txt`.
    pub names_file: Option<String>,
    /// Dataset written from the log. Default: `NamesOut.txt`.
    pub dataset_file: Option<String>,
    /// Votes after which a name stops collecting pages. Default: 20.
    pub max_votes: Option<u32>,
    /// Factor by which one gender must dominate. Default: 3.
    pub dominance_ratio: Option<u32>,
}

impl EvidenceConfig {
    pub fn effective_log_file(&self) -> &str {
        self.log_file.as_deref().unwrap_or(DEFAULT_LOG_FILE)
    }

    pub fn effective_names_file(&self) -> &str {
        self.names_file.as_deref().unwrap_or(DEFAULT_NAMES_FILE)
    }

    pub fn effective_dataset_file(&self) -> &str {
        self.dataset_file.as_deref().unwrap_or(DEFAULT_TABLE_FILE)
    }

    pub fn effective_max_votes(&self) -> u32 {
        self.max_votes.unwrap_or(DEFAULT_MAX_VOTES)
    }

    pub fn effective_dominance_ratio(&self) -> u32 {
        self.dominance_ratio.unwrap_or(DEFAULT_DOMINANCE_RATIO)
    }
}
