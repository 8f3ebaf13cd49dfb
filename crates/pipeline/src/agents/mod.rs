//! Per-kind agents: the provider adapters, chains and fallback wiring for
//! each generation kind.

pub mod code;
pub mod design;
pub mod image;
pub mod movie;
pub mod research;

use agentdeck_core::attempt::ProviderError;
use agentdeck_core::sanitize;
use agentdeck_providers::chat::{ChatClient, ChatPrompt};
use serde::de::DeserializeOwned;

/// Ask a chat model for JSON and parse it. On a parse failure the raw text
/// travels with the error so the chain can try one repair pass.
pub(crate) async fn chat_json<T: DeserializeOwned>(
    client: &ChatClient,
    prompt: &ChatPrompt<'_>,
) -> Result<T, ProviderError> {
    let text = client.complete(prompt).await?;
    sanitize::parse_json(&text).map_err(|reason| ProviderError::parse_with_raw(reason, text))
}
