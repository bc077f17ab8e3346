//! `/api/*` reverse proxy to the external Sats Jar API.
//!
//! DESIGN
//! ======
//! Lets the browser call the API same-origin during development. Requests
//! are forwarded with method, query, body and end-to-end headers intact; the
//! upstream status and body are relayed unchanged. Proxy-side failures answer
//! with a JSON `{"error": ...}` body so the login forms surface them like any
//! other API error.

use axum::body::{Body, Bytes};
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("API proxy not configured")]
    NotConfigured,

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl ProxyError {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::NOT_FOUND,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Upstream(err.to_string()) }
    }
}

/// Headers that describe a single hop and must not be forwarded.
pub(crate) fn is_hop_by_hop(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
            | "host"
            | "content-length"
    )
}

pub(crate) fn filter_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Upstream URL for a proxied path. The `/api` prefix is preserved.
pub(crate) fn upstream_url(target: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/api/{}", target.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(target) = state.config.proxy_target.as_deref() else {
        return ProxyError::NotConfigured.into_response();
    };
    let url = upstream_url(target, &path, query.as_deref());

    match relay(&state.http, method.clone(), &url, &headers, body).await {
        Ok(response) => {
            tracing::debug!(%method, %url, status = %response.status(), "api proxy");
            response
        }
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "api proxy failed");
            e.into_response()
        }
    }
}

async fn relay(
    http: &reqwest::Client,
    method: Method,
    url: &str,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let upstream = http
        .request(method, url)
        .headers(filter_headers(headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let response_headers = filter_headers(upstream.headers());
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
