//! Request building and the authenticated execution pipeline.
//!
//! # Architecture
//!
//! - [`ApiRequest`] / [`Param`] - one API call and its parameter groups
//! - [`ApiEndpoint`] - scheme and host the client targets
//! - [`Client`] - injects credentials, executes via a [`crate::transport::Transport`], decodes JSON
//! - [`ApiError`] - malformed request, transport, decode and not-implemented failures
//!
//! Every call is rendered as `resource/method/<method params>/<api params>`
//! against `a.wykop.pl`, with no query string and no body.

mod client;
mod error;
mod request;

pub use client::{APP_KEY_PARAM, Client, USER_KEY_PARAM};
pub use error::ApiError;
pub use request::{API_HOST, ApiEndpoint, ApiRequest, DEFAULT_SCHEME, Param};
