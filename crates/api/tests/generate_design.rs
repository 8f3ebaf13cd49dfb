//! Integration tests for POST /generate/design (JSON and multipart bodies).

mod common;

use agentdeck_core::credentials::Credential;
use axum::http::StatusCode;
use common::{body_json, post_json, post_multipart, Part, TEST_UPLOAD_LIMIT};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

fn assert_single_column(json: &serde_json::Value) {
    for key in ["react", "html", "css"] {
        let code = json["code"][key].as_str().unwrap();
        assert!(!code.is_empty(), "{key} is empty");
        assert!(!code.contains("grid-cols-2"), "{key} has a two-column grid");
        assert!(!code.contains("grid-cols-3"), "{key} has a three-column grid");
        assert!(!code.contains("flex-row"), "{key} has a row flexbox");
    }
}

// ---------------------------------------------------------------------------
// Test: validation of the input type and its payload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_type_returns_400() {
    let body = json!({ "type": "pdf", "url": "https://figma.com/file/ABC123/test" });
    let response = post_json(common::build_test_app(), "/generate/design", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid input type");
}

#[tokio::test]
async fn non_figma_url_returns_400() {
    let body = json!({ "type": "url", "url": "https://example.com/design" });
    let response = post_json(common::build_test_app(), "/generate/design", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Valid Figma URL is required");
}

#[tokio::test]
async fn non_image_upload_returns_400() {
    let parts = [
        Part::Text("type", "upload"),
        Part::File {
            name: "file",
            filename: "notes.txt",
            content_type: "text/plain",
            bytes: b"hello",
        },
    ];
    let response = post_multipart(common::build_test_app(), "/generate/design", &parts).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Valid image file is required");
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let big = vec![0u8; TEST_UPLOAD_LIMIT * 2];
    let parts = [
        Part::Text("type", "upload"),
        Part::File {
            name: "file",
            filename: "huge.png",
            content_type: "image/png",
            bytes: &big,
        },
    ];
    let response = post_multipart(common::build_test_app(), "/generate/design", &parts).await;
    assert!(response.status().is_client_error(), "got {}", response.status());
}

// ---------------------------------------------------------------------------
// Test: a failing design-file API still yields analysis and code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn figma_error_returns_fallback_design() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/ABC123"))
        .and(header("X-Figma-Token", "fig-token"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut providers = common::offline_providers();
    providers.figma_base_url = server.uri();
    providers.figma_token = Credential::parse("fig-token");

    let body = json!({ "type": "url", "url": "https://figma.com/file/ABC123/test" });
    let response = post_json(common::build_app_with(providers), "/generate/design", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(!json["analysis"]["components"].as_array().unwrap().is_empty());
    assert!(json["analysis"]["theme"].is_string());
    assert_single_column(&json);
}

// ---------------------------------------------------------------------------
// Test: multipart upload with no vision or code model configured
// ---------------------------------------------------------------------------

#[tokio::test]
async fn image_upload_returns_fallback_design() {
    let parts = [
        Part::Text("type", "upload"),
        Part::File {
            name: "file",
            filename: "mockup.png",
            content_type: "image/png",
            bytes: PNG_BYTES,
        },
    ];
    let response = post_multipart(common::build_test_app(), "/generate/design", &parts).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["analysis"]["colors"].is_array());
    assert_single_column(&json);
}

// ---------------------------------------------------------------------------
// Test: multipart link submission is accepted like JSON
// ---------------------------------------------------------------------------

#[tokio::test]
async fn multipart_url_submission_is_accepted() {
    let parts = [
        Part::Text("type", "url"),
        Part::Text("url", "https://www.figma.com/design/XYZ789/Landing-Page"),
    ];
    let response = post_multipart(common::build_test_app(), "/generate/design", &parts).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_single_column(&json);
}
