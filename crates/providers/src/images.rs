//! Image generation clients, tried in order by the image chain.

use agentdeck_core::credentials::Credential;
use agentdeck_core::payload::GeneratedImage;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Url;
use serde::Deserialize;
use serde_json::json;

use crate::config::ChatSettings;
use crate::error::ApiError;
use crate::http;

pub const POLLINATIONS_MODEL: &str = "FLUX (Pollinations.AI - FREE)";
pub const IMGGEN_MODEL: &str = "ImgGen.AI (FREE)";
pub const HUGGING_FACE_MODEL: &str = "Stable Diffusion XL (Hugging Face)";
pub const DALLE_MODEL: &str = "DALL-E 3";

const HUGGING_FACE_MODEL_PATH: &str = "models/stabilityai/stable-diffusion-xl-base-1.0";
const IMAGE_SIZE: u32 = 1024;
const INFERENCE_STEPS: u32 = 20;
const GUIDANCE_SCALE: f64 = 7.5;

// ---------------------------------------------------------------------------
// Pollinations
// ---------------------------------------------------------------------------

/// Keyless image URLs rendered on demand by Pollinations.
#[derive(Debug, Clone)]
pub struct PollinationsClient {
    client: reqwest::Client,
    base_url: String,
}

impl PollinationsClient {
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// The image URL for `prompt`, with the prompt percent-encoded as one
    /// path segment.
    pub fn image_url(&self, prompt: &str, seed: u32) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::decode("pollinations", format!("invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::decode("pollinations", "base URL cannot hold a path"))?
            .pop_if_empty()
            .push("prompt")
            .push(prompt);
        url.query_pairs_mut()
            .append_pair("width", &IMAGE_SIZE.to_string())
            .append_pair("height", &IMAGE_SIZE.to_string())
            .append_pair("model", "flux")
            .append_pair("nologo", "true")
            .append_pair("enhance", "true")
            .append_pair("seed", &seed.to_string());
        Ok(url)
    }

    /// Build the image URL and confirm the service renders it.
    pub async fn generate(&self, prompt: &str, seed: u32) -> Result<GeneratedImage, ApiError> {
        let url = self.image_url(prompt, seed)?;
        let response = self.client.get(url.clone()).send().await?;
        http::ensure_success("pollinations", response).await?;
        Ok(GeneratedImage {
            url: url.into(),
            model: POLLINATIONS_MODEL.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// ImgGen
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ImgGenClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ImgGenResponse {
    #[serde(default)]
    image_url: Option<String>,
}

impl ImgGenClient {
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ApiError> {
        let body = json!({
            "prompt": prompt,
            "width": IMAGE_SIZE,
            "height": IMAGE_SIZE,
            "steps": INFERENCE_STEPS,
            "guidance_scale": GUIDANCE_SCALE,
        });

        let response = self
            .client
            .post(http::join(&self.base_url, "generate"))
            .json(&body)
            .send()
            .await?;

        let result: ImgGenResponse = http::parse_response("imggen", response).await?;
        let url = result
            .image_url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ApiError::decode("imggen", "no image_url in response"))?;
        Ok(GeneratedImage {
            url,
            model: IMGGEN_MODEL.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Hugging Face
// ---------------------------------------------------------------------------

/// Stable Diffusion XL via Hugging Face inference; returns image bytes as a
/// data URL.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<Credential>,
}

impl HuggingFaceClient {
    pub fn with_client(client: reqwest::Client, base_url: String, api_key: Option<Credential>) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ApiError> {
        let key = self
            .api_key
            .as_ref()
            .ok_or(ApiError::NotConfigured("huggingface"))?;

        let body = json!({
            "inputs": prompt,
            "parameters": {
                "num_inference_steps": INFERENCE_STEPS,
                "guidance_scale": GUIDANCE_SCALE,
            }
        });

        let response = self
            .client
            .post(http::join(&self.base_url, HUGGING_FACE_MODEL_PATH))
            .bearer_auth(key.expose())
            .json(&body)
            .send()
            .await?;
        let response = http::ensure_success("huggingface", response).await?;

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_string();
        if !mime.starts_with("image/") {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::decode(
                "huggingface",
                format!("expected image bytes, got {mime}: {}", crate::error::truncate_body(&text)),
            ));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(ApiError::decode("huggingface", "empty image body"));
        }
        Ok(GeneratedImage {
            url: format!("data:{mime};base64,{}", STANDARD.encode(&bytes)),
            model: HUGGING_FACE_MODEL.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// DALL-E
// ---------------------------------------------------------------------------

/// DALL-E 3 through the OpenAI images endpoint. Paid; only tried with a
/// real OpenAI key.
#[derive(Debug, Clone)]
pub struct DalleClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<Credential>,
}

#[derive(Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Deserialize)]
struct ImageData {
    #[serde(default)]
    url: Option<String>,
}

impl DalleClient {
    pub fn with_client(client: reqwest::Client, openai: &ChatSettings) -> Self {
        Self {
            client,
            base_url: openai.base_url.clone(),
            api_key: openai.api_key.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ApiError> {
        let key = self.api_key.as_ref().ok_or(ApiError::NotConfigured("dalle"))?;

        let body = json!({
            "model": "dall-e-3",
            "prompt": prompt,
            "n": 1,
            "size": format!("{IMAGE_SIZE}x{IMAGE_SIZE}"),
            "quality": "standard",
            "style": "vivid",
        });

        let response = self
            .client
            .post(http::join(&self.base_url, "images/generations"))
            .bearer_auth(key.expose())
            .json(&body)
            .send()
            .await?;

        let result: ImagesResponse = http::parse_response("dalle", response).await?;
        let url = result
            .data
            .into_iter()
            .next()
            .and_then(|d| d.url)
            .ok_or_else(|| ApiError::decode("dalle", "no image URL in response"))?;
        Ok(GeneratedImage {
            url,
            model: DALLE_MODEL.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pollinations_url_encodes_prompt_as_segment() {
        let client = PollinationsClient::with_client(
            reqwest::Client::new(),
            "https://image.pollinations.ai".into(),
        );
        let url = client.image_url("a red sunset/over sea", 42).unwrap();
        assert_eq!(url.path(), "/prompt/a%20red%20sunset%2Fover%20sea");
        assert_eq!(
            url.query(),
            Some("width=1024&height=1024&model=flux&nologo=true&enhance=true&seed=42")
        );
        assert!(url.as_str().starts_with("https://image"));
    }
}
