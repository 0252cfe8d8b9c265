//! In-memory transport that records requests and counts body releases.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use async_trait::async_trait;
use futures_util::Stream;
use reqwest::StatusCode;
use wykop_api::{Transport, TransportError, TransportResponse};

/// What the stub saw for one executed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub has_body: bool,
}

/// Canned responder with request recording and body-release tracking.
pub struct StubTransport {
    status: StatusCode,
    body: Vec<u8>,
    fail_with_io: bool,
    fail_mid_body: bool,
    requests: Mutex<Vec<RecordedRequest>>,
    released: Arc<AtomicUsize>,
}

impl StubTransport {
    pub fn json(body: impl Into<Vec<u8>>) -> Arc<Self> {
        Self::with_status(StatusCode::OK, body)
    }

    pub fn with_status(status: StatusCode, body: impl Into<Vec<u8>>) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.into(),
            fail_with_io: false,
            fail_mid_body: false,
            requests: Mutex::new(Vec::new()),
            released: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            status: StatusCode::OK,
            body: Vec::new(),
            fail_with_io: true,
            fail_mid_body: false,
            requests: Mutex::new(Vec::new()),
            released: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Responds 200, yields `first_chunk`, then fails the body read.
    pub fn failing_mid_body(first_chunk: impl Into<Vec<u8>>) -> Arc<Self> {
        Arc::new(Self {
            status: StatusCode::OK,
            body: first_chunk.into(),
            fail_with_io: false,
            fail_mid_body: true,
            requests: Mutex::new(Vec::new()),
            released: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Path of the only recorded request, without the leading slash.
    pub fn single_path(&self) -> String {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        let url = reqwest::Url::parse(&requests[0].url).unwrap();
        url.path().trim_start_matches('/').to_string()
    }

    pub fn bodies_released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(
        &self,
        request: reqwest::Request,
    ) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.method().to_string(),
            url: request.url().to_string(),
            has_body: request.body().is_some(),
        });
        if self.fail_with_io {
            return Err(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused").into());
        }
        let mut chunks = VecDeque::from([Ok(self.body.clone())]);
        if self.fail_mid_body {
            chunks.push_back(Err(
                io::Error::new(io::ErrorKind::UnexpectedEof, "connection reset mid-body").into(),
            ));
        }
        let body = TrackedBody {
            chunks,
            released: Arc::clone(&self.released),
        };
        Ok(TransportResponse::new(self.status, Box::pin(body)))
    }
}

struct TrackedBody {
    chunks: VecDeque<Result<Vec<u8>, TransportError>>,
    released: Arc<AtomicUsize>,
}

impl Stream for TrackedBody {
    type Item = Result<Vec<u8>, TransportError>;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.chunks.pop_front())
    }
}

impl Drop for TrackedBody {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}
