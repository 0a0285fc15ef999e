//! Shared request/response handling for the sub-clients.

use crate::error::{ClientError, Result};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::warn;
use url::Url;

/// Join a resource path onto the base URL.
pub(crate) fn endpoint(base_url: &Url, path: &str) -> Result<Url> {
    base_url
        .join(path)
        .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", path, e)))
}

/// Attach the bearer token when the session has one.
pub(crate) fn authorize(builder: RequestBuilder, access_token: Option<&str>) -> RequestBuilder {
    match access_token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Send a request; failures without a response become transport errors.
pub(crate) async fn send(builder: RequestBuilder) -> Result<Response> {
    builder.send().await.map_err(|e| {
        if e.is_connect() || e.is_timeout() {
            ClientError::ServerUnreachable(e.to_string())
        } else {
            ClientError::Request(e)
        }
    })
}

/// Parse a success body into `T`, or turn an error status into `ServerError`.
pub(crate) async fn parse<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse {}: {}", what, e)))
}

/// Return a success body as raw JSON; an empty body reads as `null`.
pub(crate) async fn parse_value(response: Response, what: &str) -> Result<serde_json::Value> {
    let response = check_status(response).await?;
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(&text)
        .map_err(|e| ClientError::ParseError(format!("Failed to parse {}: {}", what, e)))
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_default();
    let body = match serde_json::from_str::<serde_json::Value>(&error_text) {
        Ok(value) => value,
        Err(_) if error_text.trim().is_empty() => serde_json::Value::String(
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
        ),
        Err(_) => serde_json::Value::String(error_text),
    };

    warn!(status = %status, body = %body, "API returned an error");
    Err(ClientError::ServerError {
        status: status.as_u16(),
        body,
    })
}
