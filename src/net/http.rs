//! Authorized HTTP client for the timetable backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! bearer token attached to every request. Server-side (SSR): stubs that
//! fail as a network error, since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to a [`RequestError`] variant instead of panicking.
//! This layer never clears the credential store and never redirects on a
//! rejected token: it only reports `Unauthorized`, and the session layer
//! decides policy.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde_json::Value;
use thiserror::Error;

/// Failure taxonomy for backend requests.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Transport failure or timeout. A retry might help; nothing here
    /// retries silently.
    #[error("network error: {0}")]
    Network(String),
    /// Token missing, expired, or rejected (HTTP 401/403). Carries the
    /// backend message when the rejection body included one.
    #[error("unauthorized")]
    Unauthorized(Option<String>),
    /// Backend-reported business failure; the message is shown verbatim.
    #[error("{0}")]
    Application(String),
    /// Response violates the wire contract.
    #[error("malformed response: {0}")]
    MalformedData(String),
}

/// HTTP method for [`request_json`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Default bound on how long a request may stay in flight. Callers pass
/// their own value to [`request_json`] when they need a different budget.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Map an HTTP status and decoded body onto the error taxonomy.
///
/// The backend wraps every response in a `{status, ...}` envelope and may
/// report business failures on any HTTP status, so the envelope is checked
/// even when the transport status looks fine. A 401/403 whose body carries a
/// message (a failed login does this) is still surfaced with that message.
pub fn classify_response(status: u16, body: Value) -> Result<Value, RequestError> {
    let envelope_error = body
        .get("status")
        .and_then(Value::as_str)
        .is_some_and(|s| s == "error");
    let message = body.get("message").and_then(Value::as_str);

    if status == 401 || status == 403 {
        return Err(RequestError::Unauthorized(message.map(str::to_owned)));
    }
    if envelope_error {
        let message = message.unwrap_or("request failed").to_owned();
        return Err(RequestError::Application(message));
    }
    if !(200..300).contains(&status) {
        return Err(RequestError::Network(format!("unexpected status {status}")));
    }
    Ok(body)
}

/// Issue a JSON request against the backend.
///
/// Attaches `Authorization: Bearer <token>` when the credential store holds
/// a token and omits the header otherwise. The request is raced against a
/// `timeout_ms` deadline; losing the race is a [`RequestError::Network`].
#[cfg(feature = "hydrate")]
pub async fn request_json(
    method: Method,
    path: &str,
    body: Option<&Value>,
    timeout_ms: u32,
) -> Result<Value, RequestError> {
    use futures::future::{Either, select};
    use gloo_net::http::Request;

    let builder = match method {
        Method::Get => Request::get(path),
        Method::Post => Request::post(path),
    };
    let builder = match crate::util::credentials::get() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    };
    let request = match body {
        Some(json) => builder
            .json(json)
            .map_err(|e| RequestError::Network(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| RequestError::Network(e.to_string()))?,
    };

    let send = Box::pin(request.send());
    let deadline = Box::pin(gloo_timers::future::sleep(std::time::Duration::from_millis(
        u64::from(timeout_ms),
    )));
    let response = match select(send, deadline).await {
        Either::Left((result, _)) => result.map_err(|e| RequestError::Network(e.to_string()))?,
        Either::Right(((), _)) => {
            return Err(RequestError::Network(format!(
                "request timed out after {timeout_ms}ms"
            )));
        }
    };

    let status = response.status();
    let body = response.json::<Value>().await.unwrap_or(Value::Null);
    classify_response(status, body)
}

#[cfg(not(feature = "hydrate"))]
pub async fn request_json(
    method: Method,
    path: &str,
    body: Option<&Value>,
    timeout_ms: u32,
) -> Result<Value, RequestError> {
    let _ = (method, path, body, timeout_ms);
    Err(RequestError::Network("not available on server".to_owned()))
}
