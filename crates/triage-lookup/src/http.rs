//! Shared HTTP plumbing for the upstream clients.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use triage_contracts::{Result, TriageError};

/// Build a client with a per-request timeout.
pub(crate) fn build_client(service: &str, timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("triage-service/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| TriageError::upstream(service, format!("failed to create HTTP client: {e}")))
}

/// Strip a trailing slash so paths can be appended with `format!`.
pub(crate) fn normalize_base(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Map a transport failure onto `TriageError::Upstream`.
pub(crate) fn send_error(service: &str, base_url: &str, timeout_secs: u64, e: reqwest::Error) -> TriageError {
    let reason = if e.is_connect() {
        format!("cannot connect to {base_url}")
    } else if e.is_timeout() {
        format!("request timed out after {timeout_secs}s")
    } else {
        e.to_string()
    };
    TriageError::upstream(service, reason)
}

/// Fail on any non-success status other than 404.
///
/// Returns `Ok(None)` for 404 so callers can treat it as "no data".
pub(crate) async fn check_status(service: &str, response: Response) -> Result<Option<Response>> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(TriageError::upstream(
            service,
            format!("HTTP {}: {}", status.as_u16(), body),
        ));
    }
    Ok(Some(response))
}

/// Decode a JSON body.
pub(crate) async fn decode<T: DeserializeOwned>(service: &str, response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| TriageError::upstream(service, format!("malformed response: {e}")))
}
