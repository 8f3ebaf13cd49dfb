//! Handlers for the five generation kinds.
//!
//! Each handler validates its body, then runs the pipeline on a spawned task
//! and awaits it, so a client that disconnects mid-chain does not cancel the
//! provider calls already in flight. The 200 body is the bare payload; the
//! result source is only logged.

use std::future::Future;
use std::sync::Arc;

use agentdeck_core::payload::{CodePayload, DesignPayload, ImagePayload, MoviePayload, ResearchPayload};
use agentdeck_core::request::{CodeRequest, ImageRequest, MovieRequest, ResearchRequest};
use agentdeck_core::validation;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::handlers::design_form::DesignForm;
use crate::state::AppState;

/// Run `task` to completion on the runtime, independent of the request future.
async fn run_detached<F>(task: F) -> AppResult<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::spawn(task)
        .await
        .map_err(|e| AppError::InternalError(format!("generation task failed: {e}")))
}

/// POST /generate/code
pub async fn code(
    State(state): State<AppState>,
    body: Result<Json<CodeRequest>, JsonRejection>,
) -> AppResult<Json<CodePayload>> {
    let Json(req) = body?;
    let input = validation::validate_code(&req)?;

    let pipeline = Arc::clone(&state.pipeline);
    let result = run_detached(async move { pipeline.generate_code(&input).await }).await?;
    Ok(Json(result.payload))
}

/// POST /generate/design
///
/// Accepts `multipart/form-data` (`type`, `url`, `file`) or JSON (`type`, `url`).
pub async fn design(
    State(state): State<AppState>,
    DesignForm(req): DesignForm,
) -> AppResult<Json<DesignPayload>> {
    let input = validation::validate_design(&req)?;

    let pipeline = Arc::clone(&state.pipeline);
    let result = run_detached(async move { pipeline.generate_design(&input).await }).await?;
    Ok(Json(result.payload))
}

/// POST /generate/image
pub async fn image(
    State(state): State<AppState>,
    body: Result<Json<ImageRequest>, JsonRejection>,
) -> AppResult<Json<ImagePayload>> {
    let Json(req) = body?;
    let input = validation::validate_image(&req)?;

    let pipeline = Arc::clone(&state.pipeline);
    let result = run_detached(async move { pipeline.generate_image(&input).await }).await?;
    Ok(Json(result.payload))
}

/// POST /generate/research
///
/// The only kind that can answer 500: when no chat model is configured.
pub async fn research(
    State(state): State<AppState>,
    body: Result<Json<ResearchRequest>, JsonRejection>,
) -> AppResult<Json<ResearchPayload>> {
    let Json(req) = body?;
    let input = validation::validate_research(&req)?;

    let pipeline = Arc::clone(&state.pipeline);
    let result = run_detached(async move { pipeline.generate_research(&input).await }).await??;
    Ok(Json(result.payload))
}

/// POST /generate/movie
pub async fn movie(
    State(state): State<AppState>,
    body: Result<Json<MovieRequest>, JsonRejection>,
) -> AppResult<Json<MoviePayload>> {
    let Json(req) = body?;
    let input = validation::validate_movie(&req)?;

    let pipeline = Arc::clone(&state.pipeline);
    let result = run_detached(async move { pipeline.generate_movie(&input).await }).await?;
    Ok(Json(result.payload))
}
