//! Shared constants.

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "GENDERSORT_LOG";

/// Filter used when `GENDERSORT_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "gendersort=info";

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "gendersort.toml";

/// User-level config directory under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".gendersort";

/// Default lookup table resource.
pub const DEFAULT_TABLE_FILE: &str = "NamesOut.txt";

/// Default evidence log file.
pub const DEFAULT_LOG_FILE: &str = "NamesLog.txt";

/// Default list of names fed to the evidence aggregator.
pub const DEFAULT_NAMES_FILE: &str = "Names.txt";

/// Suffix appended to the input stem for batch output.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_output.txt";

/// Suffix appended to the input stem for the unknown-names artifact.
pub const DEFAULT_UNKNOWN_SUFFIX: &str = "_unknown.txt";

/// A name stops collecting page votes once this many have been cast.
pub const DEFAULT_MAX_VOTES: u32 = 20;

/// One side must outweigh the other by this factor to win a vote.
pub const DEFAULT_DOMINANCE_RATIO: u32 = 3;

/// Literal placeholder some bibliographic exports use for a missing name.
pub const NULL_NAME: &str = "NULL";

/// Field separator of the table resource and the batch output.
pub const FIELD_SEPARATOR: char = '\t';

/// Separator between evidence-log blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";
