//! Core types, errors, configuration, and tracing for gendersort.
//!
//! Every other crate in the workspace depends on this one. It carries no
//! name-processing logic of its own.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use types::{GenderLabel, NormalizerVariant};
