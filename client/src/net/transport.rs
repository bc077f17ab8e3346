//! HTTP seam between the login/health operations and the browser.
//!
//! DESIGN
//! ======
//! Operations in `api` are written against [`HttpTransport`] so they run
//! unchanged against `gloo-net` in the browser and against scripted fakes in
//! tests. Replies carry the raw body text; interpretation stays in `api`.

#![allow(clippy::unused_async)]

use async_trait::async_trait;

/// A completed HTTP exchange, whatever its status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpReply {
    /// True for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure before a complete reply was available.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Minimal HTTP client surface used by the API operations.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Issue a GET and read the full body.
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError>;

    /// Issue a POST with a JSON body and read the full response body.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpReply, TransportError>;
}

/// `fetch`-backed transport used after hydration.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        let resp = gloo_net::http::Request::get(url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        read_reply(resp).await
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpReply, TransportError> {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| TransportError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        read_reply(resp).await
    }
}

#[cfg(feature = "hydrate")]
async fn read_reply(resp: gloo_net::http::Response) -> Result<HttpReply, TransportError> {
    let status = resp.status();
    let status_text = resp.status_text();
    let body = resp
        .text()
        .await
        .map_err(|e| TransportError::Body(e.to_string()))?;
    Ok(HttpReply { status, status_text, body })
}

// =============================================================================
// TEST HELPERS
// =============================================================================
