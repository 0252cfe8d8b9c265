//! wykop API client library
//!
//! Builds authenticated requests for the wykop.pl HTTP/JSON API, executes them
//! through a pluggable HTTP transport and decodes the responses into typed
//! records.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`api`] - request/URL building and the authenticated execution pipeline
//! - [`transport`] - HTTP executor trait and the reqwest-backed implementation
//! - [`resources`] - typed `links` / `link` accessors
//! - [`model`] - response records (links, comments, digs, buries, user groups)

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod model;
pub mod resources;
pub mod transport;
mod user_agent;

// Re-export commonly used types
pub use api::{ApiEndpoint, ApiError, ApiRequest, Client, Param};
pub use model::{
    AuthorInfo, Bury, Comment, Dig, Embed, Link, RelatedLink, UserGroup, WrappedError,
};
pub use resources::{LinkResource, LinksResource, PromotedSort, UpcomingSort};
pub use transport::{HttpTimeouts, ReqwestTransport, Transport, TransportError, TransportResponse};
