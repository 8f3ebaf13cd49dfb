//! OpenAI-compatible chat completions client (Groq, OpenAI).

use agentdeck_core::credentials::Credential;
use serde::{Deserialize, Serialize};

use crate::config::ChatSettings;
use crate::error::ApiError;
use crate::http;

/// One system + user exchange sent to a chat model.
#[derive(Debug, Clone, Copy)]
pub struct ChatPrompt<'a> {
    pub system: &'a str,
    pub user: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// HTTP client for a single OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    service: &'static str,
    base_url: String,
    model: String,
    api_key: Option<Credential>,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatClient {
    /// `service` names the endpoint in errors and logs (`groq`, `openai`).
    pub fn with_client(client: reqwest::Client, service: &'static str, settings: &ChatSettings) -> Self {
        Self {
            client,
            service,
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send `POST /chat/completions` and return the trimmed text of the
    /// first choice.
    pub async fn complete(&self, prompt: &ChatPrompt<'_>) -> Result<String, ApiError> {
        let key = self
            .api_key
            .as_ref()
            .ok_or(ApiError::NotConfigured(self.service))?;

        let body = CompletionRequest {
            model: &self.model,
            messages: [
                Message {
                    role: "system",
                    content: prompt.system,
                },
                Message {
                    role: "user",
                    content: prompt.user,
                },
            ],
            temperature: prompt.temperature,
            max_tokens: prompt.max_tokens,
        };

        let response = self
            .client
            .post(http::join(&self.base_url, "chat/completions"))
            .bearer_auth(key.expose())
            .json(&body)
            .send()
            .await?;

        let completion: CompletionResponse = http::parse_response(self.service, response).await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ApiError::decode(self.service, "empty completion"))
    }
}
