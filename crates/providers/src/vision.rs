//! Gemini `generateContent` client for screenshot analysis.

use agentdeck_core::credentials::Credential;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::http;

const SERVICE: &str = "gemini";

#[derive(Debug, Clone)]
pub struct VisionClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<Credential>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl VisionClient {
    pub fn with_client(
        client: reqwest::Client,
        base_url: String,
        model: String,
        api_key: Option<Credential>,
    ) -> Self {
        Self {
            client,
            base_url,
            model,
            api_key,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Ask the model about an image. Returns the concatenated text parts of
    /// the first candidate.
    pub async fn describe_image(
        &self,
        prompt: &str,
        mime_type: &str,
        image: &[u8],
    ) -> Result<String, ApiError> {
        let key = self.api_key.as_ref().ok_or(ApiError::NotConfigured(SERVICE))?;

        let body = json!({
            "contents": [{
                "parts": [
                    { "text": prompt },
                    { "inline_data": { "mime_type": mime_type, "data": STANDARD.encode(image) } },
                ]
            }]
        });

        let response = self
            .client
            .post(http::join(
                &self.base_url,
                &format!("models/{}:generateContent", self.model),
            ))
            .query(&[("key", key.expose())])
            .json(&body)
            .send()
            .await?;

        let generated: GenerateResponse = http::parse_response(SERVICE, response).await?;
        let text: String = generated
            .candidates
            .into_iter()
            .next()
            .map(|c| c.content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ApiError::decode(SERVICE, "no text in response"));
        }
        Ok(text)
    }
}
