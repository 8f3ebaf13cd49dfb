use std::collections::BTreeMap;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status. Always `ok`: every kind can fall back.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Which credentialed providers have a usable key.
    pub providers: BTreeMap<&'static str, bool>,
}

/// LLM probe response payload.
#[derive(Serialize)]
pub struct LlmHealthResponse {
    pub status: &'static str,
    pub message: String,
    pub response: String,
}

/// GET /health -- returns service status and provider configuration.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        providers: state.providers.configured().into_iter().collect(),
    })
}

/// GET /health/llm -- sends a one-line prompt to the first configured chat model.
async fn llm_check(State(state): State<AppState>) -> AppResult<Json<LlmHealthResponse>> {
    let (provider, reply) = state.pipeline.probe_llm().await?;
    Ok(Json(LlmHealthResponse {
        status: "success",
        message: format!("{provider} API is working correctly"),
        response: reply,
    }))
}

/// Mount health check routes at the root level.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/llm", get(llm_check))
}
