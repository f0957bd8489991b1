//! Shared value types.

pub mod label;
pub mod variant;

pub use label::GenderLabel;
pub use variant::NormalizerVariant;
