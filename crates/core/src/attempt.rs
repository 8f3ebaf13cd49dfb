//! Per-request provider attempt bookkeeping and the composed result type.

use std::fmt;

use serde::Serialize;

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Provider failure taxonomy
// ---------------------------------------------------------------------------

/// Why a single provider attempt did not produce a payload.
///
/// None of these ever reaches the caller; they drive the chain executor's
/// decision to move to the next provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    /// Credential missing or placeholder. The provider is skipped without a
    /// network call.
    #[error("not configured: {0}")]
    Configuration(String),

    /// Network failure, timeout or non-2xx status.
    #[error("transport failure: {0}")]
    Transport(String),

    /// A response arrived but did not fit the expected schema. `raw` keeps
    /// the body text so the executor can attempt one JSON repair pass.
    #[error("unparseable response: {reason}")]
    Parse { reason: String, raw: Option<String> },
}

impl ProviderError {
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
            raw: None,
        }
    }

    pub fn parse_with_raw(reason: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
            raw: Some(raw.into()),
        }
    }

    /// Short machine label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            ProviderError::Configuration(_) => "configuration",
            ProviderError::Transport(_) => "transport",
            ProviderError::Parse { .. } => "parse",
        }
    }
}

// ---------------------------------------------------------------------------
// Attempt log
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AttemptOutcome {
    Success,
    /// The provider was not configured and made no call.
    Skipped { reason: String },
    Failure { reason: String },
}

/// One provider attempt. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAttempt {
    pub provider_id: String,
    pub started_at: Timestamp,
    pub outcome: AttemptOutcome,
}

/// Ordered, append-only record of every provider attempt in one request.
#[derive(Debug, Clone, Default)]
pub struct AttemptLog {
    attempts: Vec<ProviderAttempt>,
}

impl AttemptLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, provider_id: &str, started_at: Timestamp) {
        self.attempts.push(ProviderAttempt {
            provider_id: provider_id.to_string(),
            started_at,
            outcome: AttemptOutcome::Success,
        });
    }

    /// Record an unsuccessful attempt. Configuration errors are logged as
    /// skips rather than failures.
    pub fn record_failure(&mut self, provider_id: &str, started_at: Timestamp, err: &ProviderError) {
        let reason = err.to_string();
        let outcome = match err {
            ProviderError::Configuration(_) => AttemptOutcome::Skipped { reason },
            _ => AttemptOutcome::Failure { reason },
        };
        self.attempts.push(ProviderAttempt {
            provider_id: provider_id.to_string(),
            started_at,
            outcome,
        });
    }

    pub fn attempts(&self) -> &[ProviderAttempt] {
        &self.attempts
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    /// Number of attempts that reached a provider and failed.
    pub fn failures(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| matches!(a.outcome, AttemptOutcome::Failure { .. }))
            .count()
    }

    /// Number of providers skipped for missing configuration.
    pub fn skips(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| matches!(a.outcome, AttemptOutcome::Skipped { .. }))
            .count()
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Where a payload came from. Logged, never serialized to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSource {
    Provider(String),
    Fallback,
}

impl ResultSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResultSource::Fallback)
    }

    /// Combine the sources of two sequential stages: any fallback stage makes
    /// the whole result a fallback, otherwise provider ids are joined.
    pub fn then(self, next: ResultSource) -> ResultSource {
        match (self, next) {
            (ResultSource::Provider(a), ResultSource::Provider(b)) => {
                ResultSource::Provider(format!("{a}+{b}"))
            }
            _ => ResultSource::Fallback,
        }
    }
}

impl fmt::Display for ResultSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultSource::Provider(id) => write!(f, "provider:{id}"),
            ResultSource::Fallback => f.write_str("fallback"),
        }
    }
}

/// A composed generation result. Only `payload` is sent over the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult<T> {
    pub source: ResultSource,
    pub payload: T,
    pub generated_at: Timestamp,
}
