//! Name analysis: token normalization, the lookup table, gender
//! resolution, batch resolution, and evidence tallying.
//!
//! Everything here is pure and in-memory. File handling lives in
//! `gendersort-storage`.

pub mod batch;
pub mod evidence;
pub mod normalizer;
pub mod resolver;
pub mod table;

pub use batch::{BatchOutcome, BatchResolver};
pub use normalizer::{normalize, normalize_with, Token, TokenList};
pub use resolver::{GenderResolver, Resolution};
pub use table::LookupTable;
