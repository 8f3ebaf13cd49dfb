/// Domain errors surfaced by the core crate.
///
/// Only [`CoreError::Validation`] and [`CoreError::Configuration`] ever reach
/// a caller as a non-200 response; provider failures are modelled separately
/// by [`crate::attempt::ProviderError`] and never escape the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A subsystem has no usable credential at all (not a single provider
    /// can be attempted and no fallback is permitted).
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
