//! Errors from the upstream HTTP layer.

use agentdeck_core::attempt::ProviderError;

/// Longest response body kept in an error message.
const MAX_BODY_CHARS: usize = 500;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The service needs a credential that is missing or a placeholder.
    #[error("{0} credential not configured")]
    NotConfigured(&'static str),

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("{service} API error ({status}): {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// A 2xx response whose body did not have the expected shape.
    #[error("unexpected {service} response: {reason}")]
    Decode {
        service: &'static str,
        reason: String,
        /// Body text, kept when it might be recoverable JSON.
        raw: Option<String>,
    },
}

impl ApiError {
    pub fn decode(service: &'static str, reason: impl Into<String>) -> Self {
        Self::Decode {
            service,
            reason: reason.into(),
            raw: None,
        }
    }
}

impl From<ApiError> for ProviderError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotConfigured(_) => ProviderError::Configuration(err.to_string()),
            ApiError::Request(_) | ApiError::Status { .. } => ProviderError::Transport(err.to_string()),
            ApiError::Decode { reason, raw, .. } => ProviderError::Parse { reason, raw },
        }
    }
}

/// Cut `body` to a loggable length on a character boundary.
pub(crate) fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_BODY_CHARS) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
