//! Response helpers shared by every client.

use serde::de::DeserializeOwned;

use crate::error::{truncate_body, ApiError};

/// Return the response unchanged on a 2xx status, otherwise an
/// [`ApiError::Status`] carrying the (truncated) body.
pub(crate) async fn ensure_success(
    service: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(ApiError::Status {
            service,
            status: status.as_u16(),
            body: truncate_body(&body),
        });
    }
    Ok(response)
}

/// Parse a successful JSON body, keeping the raw text on decode failure.
pub(crate) async fn parse_response<T: DeserializeOwned>(
    service: &'static str,
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let response = ensure_success(service, response).await?;
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode {
        service,
        reason: e.to_string(),
        raw: Some(text),
    })
}

/// Join a base URL and a path without doubling or dropping the slash.
pub(crate) fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
