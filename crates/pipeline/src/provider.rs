//! The seam between the chain executor and the upstream clients.

use agentdeck_core::attempt::ProviderError;
use async_trait::async_trait;

/// One upstream service able to turn a stage input into a stage output.
///
/// Implementations must not retry internally; the chain moves to the next
/// provider instead. A missing credential is reported as
/// [`ProviderError::Configuration`] before any network call.
#[async_trait]
pub trait Provider<I, O>: Send + Sync {
    /// Stable identifier used in logs and result sources (`groq`, `figma`).
    fn id(&self) -> &str;

    async fn attempt(&self, input: &I) -> Result<O, ProviderError>;
}
