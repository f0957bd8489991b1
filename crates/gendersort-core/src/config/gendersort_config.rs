//! Top-level gendersort configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{BatchConfig, EvidenceConfig, NormalizerConfig, TableConfig};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;
use crate::types::NormalizerVariant;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`GENDERSORT_*`)
/// 3. Project config (`gendersort.toml` in the working root)
/// 4. User config (`~/.gendersort/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GendersortConfig {
    pub table: TableConfig,
    pub normalizer: NormalizerConfig,
    pub batch: BatchConfig,
    pub evidence: EvidenceConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_file: Option<PathBuf>,
    pub table_path: Option<String>,
    pub variant: Option<NormalizerVariant>,
    pub batch_threads: Option<usize>,
}

impl GendersortConfig {
    /// Load configuration with 4-layer resolution.
    ///
    /// An explicit `cli.config_file` replaces the project-config lookup and
    /// must exist.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(path = %user_config_path.display(), error = %e, "ignoring user config");
                    }
                }
            }
        }

        // Layer 3: project config, or the file named on the command line
        let explicit = cli_overrides.and_then(|c| c.config_file.clone());
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, &path)?;
            }
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &GendersortConfig) -> Result<(), ConfigError> {
        if config.evidence.max_votes == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "evidence.max_votes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.evidence.dominance_ratio == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "evidence.dominance_ratio".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.batch.effective_output_suffix() == config.batch.effective_unknown_suffix() {
            return Err(ConfigError::InvalidValue {
                field: "batch.unknown_suffix".to_string(),
                message: "must differ from batch.output_suffix".to_string(),
            });
        }
        if let Some(ref path) = config.table.path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "table.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.gendersort/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut GendersortConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GendersortConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut GendersortConfig, other: &GendersortConfig) {
        // Table
        if other.table.path.is_some() {
            base.table.path = other.table.path.clone();
        }

        // Normalizer
        if other.normalizer.variant.is_some() {
            base.normalizer.variant = other.normalizer.variant;
        }

        // Batch
        if other.batch.threads.is_some() {
            base.batch.threads = other.batch.threads;
        }
        if other.batch.output_suffix.is_some() {
            base.batch.output_suffix = other.batch.output_suffix.clone();
        }
        if other.batch.unknown_suffix.is_some() {
            base.batch.unknown_suffix = other.batch.unknown_suffix.clone();
        }

        // Evidence
        if other.evidence.log_file.is_some() {
            base.evidence.log_file = other.evidence.log_file.clone();
        }
        if other.evidence.names_file.is_some() {
            base.evidence.names_file = other.evidence.names_file.clone();
        }
        if other.evidence.dataset_file.is_some() {
            base.evidence.dataset_file = other.evidence.dataset_file.clone();
        }
        if other.evidence.max_votes.is_some() {
            base.evidence.max_votes = other.evidence.max_votes;
        }
        if other.evidence.dominance_ratio.is_some() {
            base.evidence.dominance_ratio = other.evidence.dominance_ratio;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GENDERSORT_TABLE_PATH`, `GENDERSORT_BATCH_THREADS`, etc.
    fn apply_env_overrides(config: &mut GendersortConfig) {
        if let Ok(val) = std::env::var("GENDERSORT_TABLE_PATH") {
            config.table.path = Some(val);
        }
        if let Ok(val) = std::env::var("GENDERSORT_NORMALIZER_VARIANT") {
            match val.parse::<NormalizerVariant>() {
                Ok(v) => config.normalizer.variant = Some(v),
                Err(message) => tracing::warn!(%message, "ignoring GENDERSORT_NORMALIZER_VARIANT"),
            }
        }
        if let Ok(val) = std::env::var("GENDERSORT_BATCH_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.batch.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GENDERSORT_EVIDENCE_LOG_FILE") {
            config.evidence.log_file = Some(val);
        }
        if let Ok(val) = std::env::var("GENDERSORT_EVIDENCE_MAX_VOTES") {
            if let Ok(v) = val.parse::<u32>() {
                config.evidence.max_votes = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut GendersortConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.table_path {
            config.table.path = Some(v.clone());
        }
        if let Some(v) = cli.variant {
            config.normalizer.variant = Some(v);
        }
        if let Some(v) = cli.batch_threads {
            config.batch.threads = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.gendersort/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(USER_CONFIG_DIR))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
