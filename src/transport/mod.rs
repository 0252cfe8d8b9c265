//! HTTP executor seam between the API client and the network.
//!
//! The client only needs "send this request, give me a status and a body".
//! [`Transport`] captures that contract so production code can use
//! [`ReqwestTransport`] while tests plug in in-memory stubs.
//!
//! Response bodies are owned streams: whoever holds a [`TransportResponse`]
//! releases the underlying connection by dropping it.

mod http;

pub use http::{HttpTimeouts, ReqwestTransport};

use std::fmt;

use async_trait::async_trait;
use futures_util::stream::{self, BoxStream};
use futures_util::{StreamExt, TryStreamExt};
use reqwest::StatusCode;
use thiserror::Error;

/// Streamed response body chunks.
pub type BodyStream = BoxStream<'static, Result<Vec<u8>, TransportError>>;

/// Transport-level failures, passed through to callers unchanged.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Error reported by reqwest (connect, TLS, timeout, body read).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// I/O failure from a non-reqwest executor.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Executes body-less HTTP requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the response status and body stream.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request cannot be completed.
    async fn execute(&self, request: reqwest::Request) -> Result<TransportResponse, TransportError>;
}

/// Status plus an owned body stream.
pub struct TransportResponse {
    status: StatusCode,
    body: BodyStream,
}

impl TransportResponse {
    /// Wraps an arbitrary body stream.
    #[must_use]
    pub fn new(status: StatusCode, body: BodyStream) -> Self {
        Self { status, body }
    }

    /// Builds a response whose body is a single in-memory chunk.
    #[must_use]
    pub fn from_bytes(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        let chunk: Result<Vec<u8>, TransportError> = Ok(body.into());
        Self::new(status, stream::once(async move { chunk }).boxed())
    }

    /// Response status. Informational only; the client does not act on it.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Reads the whole body, consuming the response.
    ///
    /// # Errors
    ///
    /// Returns the first [`TransportError`] raised while streaming.
    pub async fn bytes(self) -> Result<Vec<u8>, TransportError> {
        self.body
            .try_fold(Vec::new(), |mut buffer, chunk| async move {
                buffer.extend_from_slice(&chunk);
                Ok::<_, TransportError>(buffer)
            })
            .await
    }

    /// Reads and discards the body, consuming the response.
    ///
    /// # Errors
    ///
    /// Returns the first [`TransportError`] raised while streaming.
    pub async fn drain(self) -> Result<(), TransportError> {
        self.body
            .try_for_each(|_| async { Ok::<_, TransportError>(()) })
            .await
    }
}

impl fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
