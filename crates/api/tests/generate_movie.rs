//! Integration tests for POST /generate/movie.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ---------------------------------------------------------------------------
// Test: validation messages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_fields_return_400() {
    let response = post_json(common::build_test_app(), "/generate/movie", json!({ "emotion": "Drama" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Both emotion and language are required");
}

#[tokio::test]
async fn unknown_combination_returns_400() {
    let body = json!({ "emotion": "Sleepy", "language": "Telugu" });
    let response = post_json(common::build_test_app(), "/generate/movie", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid language or emotion combination");
}

// ---------------------------------------------------------------------------
// Test: IMDb unreachable falls back to the curated catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn offline_returns_curated_titles() {
    let body = json!({ "emotion": "Comedy", "language": "Hindi" });
    let response = post_json(common::build_test_app(), "/generate/movie", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["emotion"], "Comedy");
    assert_eq!(json["language"], "Hindi");
    let movies = json["movies"].as_array().unwrap();
    assert!(!movies.is_empty());
    assert_eq!(json["count"], movies.len());
    assert!(json["url"].as_str().unwrap().contains("genres=comedy"));
}

// ---------------------------------------------------------------------------
// Test: scraped titles are returned
// ---------------------------------------------------------------------------

#[tokio::test]
async fn scraped_listing_is_used() {
    let server = MockServer::start().await;
    let html = r#"<ul>
        <li><h3 class="ipc-title__text">1. Baahubali: The Beginning</h3></li>
        <li><h3 class="ipc-title__text">2. RRR</h3></li>
    </ul>"#;
    Mock::given(method("GET"))
        .and(path("/search/title/"))
        .and(query_param("genres", "action"))
        .and(query_param("languages", "te"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .expect(1)
        .mount(&server)
        .await;

    let mut providers = common::offline_providers();
    providers.imdb_base_url = server.uri();

    let body = json!({ "emotion": "action", "language": "telugu" });
    let response = post_json(common::build_app_with(providers), "/generate/movie", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["movies"], json!(["Baahubali: The Beginning", "RRR"]));
    assert_eq!(json["count"], 2);
    assert_eq!(json["emotion"], "action");
}
