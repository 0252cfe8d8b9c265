//! reqwest-backed [`Transport`] with the project's networking defaults.
//!
//! Timeouts, user-agent and compression are fixed here so every client built
//! by the library behaves the same on the wire.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, ClientBuilder, Proxy};
use tracing::{debug, warn};

use super::{Transport, TransportError, TransportResponse};
use crate::user_agent;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const READ_TIMEOUT_SECS: u64 = 30;

/// Connect and read timeouts for [`ReqwestTransport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    /// TCP/TLS connect timeout in seconds.
    pub connect_secs: u64,
    /// Whole-request timeout in seconds.
    pub read_secs: u64,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            connect_secs: CONNECT_TIMEOUT_SECS,
            read_secs: READ_TIMEOUT_SECS,
        }
    }
}

/// Production transport backed by a pooled [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a transport with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeouts(HttpTimeouts::default())
    }

    /// Builds a transport with explicit timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the HTTP client cannot be constructed.
    pub fn with_timeouts(timeouts: HttpTimeouts) -> Result<Self, TransportError> {
        let client = build_http_client(timeouts)?;
        Ok(Self { client })
    }

    /// Wraps an already configured reqwest client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: reqwest::Request) -> Result<TransportResponse, TransportError> {
        let response = self.client.execute(request).await?;
        let status = response.status();
        debug!(status = status.as_u16(), "API response received");
        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map(Vec::from).map_err(TransportError::from))
            .boxed();
        Ok(TransportResponse::new(status, body))
    }
}

fn build_http_client(timeouts: HttpTimeouts) -> Result<Client, TransportError> {
    match catch_unwind(AssertUnwindSafe(|| base_builder(timeouts).build())) {
        Ok(result) => Ok(result?),
        Err(_) => {
            // Some sandboxed macOS environments panic while reading system proxy
            // settings; environment proxies still apply on the fallback path.
            warn!("HTTP client hit system proxy panic; using env-proxy fallback builder");
            let builder = apply_env_proxy_fallback(base_builder(timeouts).no_proxy());
            Ok(builder.build()?)
        }
    }
}

fn base_builder(timeouts: HttpTimeouts) -> ClientBuilder {
    Client::builder()
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .timeout(Duration::from_secs(timeouts.read_secs))
        .user_agent(user_agent::default_user_agent())
        .gzip(true)
}

fn apply_env_proxy_fallback(mut builder: ClientBuilder) -> ClientBuilder {
    if let Some(proxy) = find_first_env_var(&["HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"])
        && let Ok(resolved) = Proxy::https(&proxy)
    {
        builder = builder.proxy(resolved);
    }
    if let Some(proxy) = find_first_env_var(&["HTTP_PROXY", "http_proxy", "ALL_PROXY", "all_proxy"])
        && let Ok(resolved) = Proxy::http(&proxy)
    {
        builder = builder.proxy(resolved);
    }
    builder
}

fn find_first_env_var(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}
