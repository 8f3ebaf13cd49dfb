//! Integration tests for POST /generate/research.

mod common;

use agentdeck_core::credentials::Credential;
use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ---------------------------------------------------------------------------
// Test: a short query is rejected before any provider is called
// ---------------------------------------------------------------------------

#[tokio::test]
async fn short_query_returns_400_without_provider_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut providers = common::offline_providers();
    providers.groq.base_url = server.uri();
    providers.groq.api_key = Credential::parse("gsk-test");

    let response = post_json(common::build_app_with(providers), "/generate/research", json!({ "query": "x" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Query must be at least 5 characters long");
}

// ---------------------------------------------------------------------------
// Test: no chat credential at all is the one 500 case
// ---------------------------------------------------------------------------

#[tokio::test]
async fn no_llm_configured_returns_500() {
    let response = post_json(common::build_test_app(), "/generate/research", json!({ "query": "abcde" })).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "AI service not configured. Please check server configuration."
    );
    assert_eq!(json["code"], "CONFIGURATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: a configured but unreachable model falls back with 200
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_llm_returns_fallback_report() {
    let mut providers = common::offline_providers();
    providers.groq.api_key = Credential::parse("gsk-test");

    let body = json!({ "query": "renewable energy storage" });
    let response = post_json(common::build_app_with(providers), "/generate/research", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["query"], "renewable energy storage");
    assert_eq!(json["keyFindings"].as_array().unwrap().len(), 5);
    let sources = json["sources"].as_array().unwrap();
    assert!((4..=6).contains(&sources.len()));
    assert!(sources[0]["relevanceScore"].is_number());
    assert!(json["report"].as_str().unwrap().starts_with("# Research Report"));
    assert!(json["analysis"]["dateRange"].is_string());
}

// ---------------------------------------------------------------------------
// Test: model text flows into the payload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn llm_text_is_used() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": "1. Storage costs fell\n2. Grid demand rose" } }]
        })))
        .expect(3)
        .mount(&server)
        .await;

    let mut providers = common::offline_providers();
    providers.groq.base_url = server.uri();
    providers.groq.api_key = Credential::parse("gsk-test");

    let body = json!({ "query": "renewable energy storage" });
    let response = post_json(common::build_app_with(providers), "/generate/research", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["keyFindings"], json!(["Storage costs fell", "Grid demand rose"]));
    assert_eq!(json["analysis"]["credibility"], "High");
}
