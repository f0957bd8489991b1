//! Configuration system for gendersort.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod batch_config;
pub mod evidence_config;
pub mod gendersort_config;
pub mod normalizer_config;
pub mod table_config;

pub use batch_config::BatchConfig;
pub use evidence_config::EvidenceConfig;
pub use gendersort_config::{CliOverrides, GendersortConfig};
pub use normalizer_config::NormalizerConfig;
pub use table_config::TableConfig;
