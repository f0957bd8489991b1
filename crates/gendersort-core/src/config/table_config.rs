//! Lookup table configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TABLE_FILE;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TableConfig {
    /// Path to the `NAME<TAB>LABEL` resource. Default: `NamesOut.txt`.
    pub path: Option<String>,
}

impl TableConfig {
    pub fn effective_path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_TABLE_FILE)
    }
}
