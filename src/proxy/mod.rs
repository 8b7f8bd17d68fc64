// Credential-hiding proxies for the third-party search APIs
//
// Each endpoint validates its query, attaches server-side credentials and
// forwards a single request upstream. No retries, no caching.

use crate::config::{Credentials, UpstreamConfig};
use crate::error::Result;
use crate::{log_debug, log_warn};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;

mod error;
mod server;
pub mod shopping;
pub mod video;

pub use error::ProxyError;
pub use server::{build_router, serve, serve_on, shutdown_signal};

/// Shared state handed to every handler
pub struct ProxyState {
    pub client: Client,
    pub upstream: UpstreamConfig,
    pub credentials: Credentials,
}

impl ProxyState {
    pub fn new(upstream: UpstreamConfig, credentials: Credentials, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            upstream,
            credentials,
        })
    }
}

/// Parse an optional numeric parameter, falling back to `default` when it is
/// absent or not a number, then clamp into `min..=max`.
pub(crate) fn clamped_param(raw: Option<&str>, default: u32, min: u32, max: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .map(|v| v.clamp(i64::from(min), i64::from(max)) as u32)
        .unwrap_or(default)
}

/// Trimmed, non-empty value of an optional parameter
pub(crate) fn required_param(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// Pull a human-readable message out of an upstream error payload.
///
/// Understands `{"errorMessage": ...}` and `{"error": {"message": ...}}`.
pub(crate) fn upstream_message(body: &Value) -> Option<String> {
    if let Some(msg) = body.get("errorMessage").and_then(Value::as_str) {
        return Some(msg.to_string());
    }
    match body.get("error") {
        Some(Value::Object(err)) => err.get("message").and_then(Value::as_str).map(str::to_string),
        Some(Value::String(msg)) => Some(msg.clone()),
        _ => None,
    }
}

/// Send one upstream request and return its JSON body.
///
/// Transport failures, non-success statuses, error payloads and bodies that
/// are not JSON all become [`ProxyError::Upstream`].
pub(crate) async fn forward(request: RequestBuilder, service: &str) -> std::result::Result<Value, ProxyError> {
    let response = request.send().await.map_err(|e| {
        let e = e.without_url();
        log_warn!("{} request failed: {}", service, e);
        ProxyError::Upstream(format!("{} request failed: {}", service, e))
    })?;

    let status = response.status();
    let text = response.text().await.map_err(|e| {
        ProxyError::Upstream(format!("{} response could not be read: {}", service, e.without_url()))
    })?;
    let body = serde_json::from_str::<Value>(&text);

    if !status.is_success() {
        let message = body
            .as_ref()
            .ok()
            .and_then(upstream_message)
            .unwrap_or_else(|| status.to_string());
        log_warn!("{} answered {}: {}", service, status, message);
        return Err(ProxyError::Upstream(message));
    }

    let body = body.map_err(|_| {
        log_warn!("{} returned a non-JSON body", service);
        ProxyError::Upstream(format!("malformed {} response", service))
    })?;

    if body.get("error").is_some() {
        let message = upstream_message(&body).unwrap_or_else(|| format!("{} reported an error", service));
        log_warn!("{} reported an error: {}", service, message);
        return Err(ProxyError::Upstream(message));
    }

    log_debug!("{} answered {}", service, status);
    Ok(body)
}
