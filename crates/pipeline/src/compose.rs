//! Response composition and the per-request summary log.

use std::time::Instant;

use agentdeck_core::attempt::{AttemptLog, AttemptOutcome, GenerationResult, ResultSource};
use agentdeck_core::kind::GenerationKind;
use agentdeck_core::types::Timestamp;

/// Wrap a payload with its source and write the attempt history to the log.
///
/// The source and attempts are only logged; callers serialize
/// `result.payload` alone.
pub fn compose<T>(
    kind: GenerationKind,
    source: ResultSource,
    payload: T,
    log: &AttemptLog,
    started: Instant,
    generated_at: Timestamp,
) -> GenerationResult<T> {
    for attempt in log.attempts() {
        match &attempt.outcome {
            AttemptOutcome::Success => tracing::debug!(
                kind = %kind,
                provider = %attempt.provider_id,
                started_at = %attempt.started_at,
                outcome = "success",
                "Provider attempt"
            ),
            AttemptOutcome::Skipped { reason } => tracing::debug!(
                kind = %kind,
                provider = %attempt.provider_id,
                started_at = %attempt.started_at,
                outcome = "skipped",
                reason = %reason,
                "Provider attempt"
            ),
            AttemptOutcome::Failure { reason } => tracing::debug!(
                kind = %kind,
                provider = %attempt.provider_id,
                started_at = %attempt.started_at,
                outcome = "failure",
                reason = %reason,
                "Provider attempt"
            ),
        }
    }

    tracing::info!(
        kind = %kind,
        source = %source,
        attempts = log.len(),
        failures = log.failures(),
        skipped = log.skips(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Generation complete"
    );

    GenerationResult {
        source,
        payload,
        generated_at,
    }
}
