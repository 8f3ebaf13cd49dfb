//! Sequential provider chain executor.
//!
//! Providers are tried strictly in order. The first success wins; every
//! failure is recorded in the [`AttemptLog`] and the next provider is tried.
//! An exhausted chain is not an error: the caller synthesizes a fallback.

use std::sync::Arc;
use std::time::{Duration, Instant};

use agentdeck_core::attempt::{AttemptLog, ProviderError, ResultSource};
use agentdeck_core::types::now;

use crate::provider::Provider;

/// Second-chance parser applied to a raw body after a parse failure.
pub type RepairFn<O> = fn(&str) -> Result<O, String>;

/// What a chain run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ChainOutcome<O> {
    Success { provider_id: String, payload: O },
    Exhausted,
}

impl<O> ChainOutcome<O> {
    /// The provider payload, or `fallback()` when the chain was exhausted.
    pub fn or_fallback(self, fallback: impl FnOnce() -> O) -> (ResultSource, O) {
        match self {
            ChainOutcome::Success {
                provider_id,
                payload,
            } => (ResultSource::Provider(provider_id), payload),
            ChainOutcome::Exhausted => (ResultSource::Fallback, fallback()),
        }
    }
}

pub struct ProviderChain<I, O> {
    stage: &'static str,
    providers: Vec<Arc<dyn Provider<I, O>>>,
    repair: Option<RepairFn<O>>,
    timeout: Duration,
}

impl<I, O> ProviderChain<I, O> {
    /// `stage` names the chain in logs, e.g. `code.solution`.
    pub fn new(stage: &'static str, timeout: Duration) -> Self {
        Self {
            stage,
            providers: Vec::new(),
            repair: None,
            timeout,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn Provider<I, O>>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Allow one repair pass on parse failures that carry the raw body.
    pub fn with_repair(mut self, repair: RepairFn<O>) -> Self {
        self.repair = Some(repair);
        self
    }

    pub fn stage(&self) -> &'static str {
        self.stage
    }

    pub fn provider_ids(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    /// Try each provider in order until one succeeds.
    pub async fn execute(&self, input: &I, log: &mut AttemptLog) -> ChainOutcome<O> {
        for provider in &self.providers {
            let id = provider.id();
            let started_at = now();
            let timer = Instant::now();

            let result = match tokio::time::timeout(self.timeout, provider.attempt(input)).await {
                Ok(result) => result,
                Err(_) => Err(ProviderError::Transport(format!(
                    "timed out after {}ms",
                    self.timeout.as_millis()
                ))),
            };
            let result = self.repair_once(id, result);
            let elapsed_ms = timer.elapsed().as_millis() as u64;

            match result {
                Ok(payload) => {
                    log.record_success(id, started_at);
                    tracing::info!(stage = self.stage, provider = id, elapsed_ms, "Provider succeeded");
                    return ChainOutcome::Success {
                        provider_id: id.to_string(),
                        payload,
                    };
                }
                Err(err) => {
                    log.record_failure(id, started_at, &err);
                    match &err {
                        ProviderError::Configuration(_) => {
                            tracing::debug!(stage = self.stage, provider = id, error = %err, "Provider skipped");
                        }
                        _ => {
                            tracing::warn!(
                                stage = self.stage,
                                provider = id,
                                outcome = err.label(),
                                elapsed_ms,
                                error = %err,
                                "Provider failed"
                            );
                        }
                    }
                }
            }
        }

        tracing::info!(stage = self.stage, "Provider chain exhausted");
        ChainOutcome::Exhausted
    }

    /// Apply the repair parser at most once, and only to parse failures that
    /// kept the raw body.
    fn repair_once(&self, id: &str, result: Result<O, ProviderError>) -> Result<O, ProviderError> {
        let (repair, reason, raw) = match (self.repair, result) {
            (Some(repair), Err(ProviderError::Parse { reason, raw: Some(raw) })) => (repair, reason, raw),
            (_, other) => return other,
        };

        match repair(&raw) {
            Ok(payload) => {
                tracing::debug!(stage = self.stage, provider = id, "Recovered response after JSON repair");
                Ok(payload)
            }
            Err(repair_err) => Err(ProviderError::parse(format!(
                "{reason}; after repair: {repair_err}"
            ))),
        }
    }
}
