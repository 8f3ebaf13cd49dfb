#![allow(dead_code)]

use std::time::Duration;

use agentdeck_api::config::ServerConfig;
use agentdeck_api::router::build_app_router;
use agentdeck_api::state::AppState;
use agentdeck_providers::ProviderConfig;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Nothing listens on the discard port, so connections fail immediately.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

/// Upload limit used by the test router.
pub const TEST_UPLOAD_LIMIT: usize = 64 * 1024;

/// Build a test `ServerConfig` with safe defaults and a fixed synthesis seed.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: TEST_UPLOAD_LIMIT,
        synth_seed: Some(7),
    }
}

/// Provider configuration with no credentials and every endpoint unreachable.
pub fn offline_providers() -> ProviderConfig {
    let mut providers = ProviderConfig::default();
    providers.groq.base_url = UNREACHABLE.into();
    providers.openai.base_url = UNREACHABLE.into();
    providers.gemini_base_url = UNREACHABLE.into();
    providers.figma_base_url = UNREACHABLE.into();
    providers.hugging_face_base_url = UNREACHABLE.into();
    providers.imggen_base_url = UNREACHABLE.into();
    providers.pollinations_base_url = UNREACHABLE.into();
    providers.leetcode_base_url = UNREACHABLE.into();
    providers.imdb_base_url = UNREACHABLE.into();
    providers.timeout = Duration::from_secs(5);
    providers
}

/// The full application router with every provider offline.
pub fn build_test_app() -> Router {
    build_app_with(offline_providers())
}

/// The full application router around the given providers, using the same
/// middleware stack as `main.rs`.
pub fn build_app_with(providers: ProviderConfig) -> Router {
    build_app_with_config(test_config(), providers)
}

/// Like [`build_app_with`], with a custom server configuration.
pub fn build_app_with_config(config: ServerConfig, providers: ProviderConfig) -> Router {
    let state = AppState::new(config.clone(), providers, reqwest::Client::new());
    build_app_router(state, &config)
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: impl Into<Body>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub const BOUNDARY: &str = "agentdeck-test-boundary";

/// One part of a hand-built `multipart/form-data` body.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        filename: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

/// Encode `parts` as a multipart body delimited by [`BOUNDARY`].
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            Part::File {
                name,
                filename,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: Router, uri: &str, parts: &[Part<'_>]) -> Response {
    let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
    post_raw(app, uri, &content_type, multipart_body(parts)).await
}
