//! Integration tests for POST /generate/image.

mod common;

use std::time::Duration;

use agentdeck_core::credentials::Credential;
use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

// ---------------------------------------------------------------------------
// Test: prompt length boundary
// ---------------------------------------------------------------------------

#[tokio::test]
async fn two_char_prompt_is_rejected() {
    let response = post_json(common::build_test_app(), "/generate/image", json!({ "prompt": "ab" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Prompt must be at least 3 characters long");
}

#[tokio::test]
async fn three_char_prompt_is_accepted() {
    let response = post_json(common::build_test_app(), "/generate/image", json!({ "prompt": "abc" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["style"], "realistic");
}

#[tokio::test]
async fn missing_prompt_is_rejected() {
    let response = post_json(common::build_test_app(), "/generate/image", json!({ "style": "anime" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Text prompt is required");
}

// ---------------------------------------------------------------------------
// Test: every image provider unreachable
// ---------------------------------------------------------------------------

#[tokio::test]
async fn offline_providers_return_svg_placeholder() {
    let body = json!({ "prompt": "a red sunset", "style": "realistic" });
    let response = post_json(common::build_test_app(), "/generate/image", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let image_url = json["imageUrl"].as_str().unwrap();
    assert!(image_url.starts_with("data:") || image_url.starts_with("https://image"));
    assert!(!json["enhancedPrompt"].as_str().unwrap().is_empty());
    assert_eq!(json["metadata"]["model"], "Placeholder Generator");
    assert_eq!(json["prompt"], "a red sunset");
    assert_eq!(json["dimensions"], "1024x1024");
    assert!(json["generatedAt"].is_string());
}

// ---------------------------------------------------------------------------
// Test: every provider hangs longer than the request timeout allows
// ---------------------------------------------------------------------------

#[tokio::test]
async fn hanging_providers_return_placeholder_before_request_timeout() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&server)
        .await;

    let mut providers = common::offline_providers();
    providers.groq.base_url = server.uri();
    providers.groq.api_key = Credential::parse("gsk-test");
    providers.openai.base_url = server.uri();
    providers.openai.api_key = Credential::parse("sk-test");
    providers.pollinations_base_url = server.uri();
    providers.imggen_base_url = server.uri();
    providers.hugging_face_base_url = server.uri();
    providers.hugging_face_api_key = Credential::parse("hf-test");
    providers.timeout = Duration::from_secs(1);

    // Five one-second attempts would outlast the four-second request timeout.
    let mut config = common::test_config();
    config.request_timeout_secs = 4;
    let app = common::build_app_with_config(config, providers);

    let response = post_json(app, "/generate/image", json!({ "prompt": "a red sunset" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["metadata"]["model"], "Placeholder Generator");
    assert_eq!(json["prompt"], "a red sunset");
}
