//! Typed accessors over [`crate::Client`].
//!
//! Each accessor method builds exactly one [`crate::ApiRequest`] with a fixed
//! `resource/method` pair and decodes the response into a model type.
//! Accessors the API offers but this crate does not implement yet return
//! [`crate::ApiError::NotImplemented`].

mod links;

pub use links::{LinkResource, LinksResource, ParseSortError, PromotedSort, UpcomingSort};
