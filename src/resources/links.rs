//! `links` and `link` resource accessors.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::instrument;

use crate::api::{ApiError, ApiRequest, Client};
use crate::model::{Bury, Comment, Dig, Link, RelatedLink};

/// Name of the positional id parameter used by `link/*` methods.
const ID_PARAM: &str = "param1";

/// Ordering for `links/promoted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromotedSort {
    /// Top of the last 24 hours.
    #[default]
    Day,
    /// Top of the last 7 days.
    Week,
    /// Top of the last 30 days.
    Month,
}

impl PromotedSort {
    /// Wire value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

/// Ordering for `links/upcoming`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpcomingSort {
    /// Newest first.
    #[default]
    Date,
    /// Most dug.
    Votes,
    /// Most commented.
    Comments,
}

impl UpcomingSort {
    /// Wire value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Votes => "votes",
            Self::Comments => "comments",
        }
    }
}

/// A sort string that is not part of the closed set for its listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sort '{value}', expected one of: {expected}")]
pub struct ParseSortError {
    /// The rejected input.
    pub value: String,
    /// Accepted values, comma separated.
    pub expected: &'static str,
}

impl FromStr for PromotedSort {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(ParseSortError {
                value: s.to_string(),
                expected: "day, week, month",
            }),
        }
    }
}

impl FromStr for UpcomingSort {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "votes" => Ok(Self::Votes),
            "comments" => Ok(Self::Comments),
            _ => Err(ParseSortError {
                value: s.to_string(),
                expected: "date, votes, comments",
            }),
        }
    }
}

impl fmt::Display for PromotedSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UpcomingSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listings of links: the main page and the upcoming queue.
#[derive(Debug, Clone, Copy)]
pub struct LinksResource<'a> {
    client: &'a Client,
}

impl<'a> LinksResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Request for `links/promoted`.
    #[must_use]
    pub fn promoted_request(page: u32, sort: PromotedSort) -> ApiRequest {
        ApiRequest::get("links", "promoted")
            .api_param("page", page)
            .api_param("sort", sort)
    }

    /// Request for `links/upcoming`.
    #[must_use]
    pub fn upcoming_request(page: u32, sort: UpcomingSort) -> ApiRequest {
        ApiRequest::get("links", "upcoming")
            .api_param("page", page)
            .api_param("sort", sort)
    }

    /// Links promoted to the main page.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the client pipeline.
    #[instrument(level = "debug", skip(self))]
    pub async fn promoted(&self, page: u32, sort: PromotedSort) -> Result<Vec<Link>, ApiError> {
        self.client
            .execute_json(&Self::promoted_request(page, sort))
            .await
    }

    /// Links waiting in the upcoming queue.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the client pipeline.
    #[instrument(level = "debug", skip(self))]
    pub async fn upcoming(&self, page: u32, sort: UpcomingSort) -> Result<Vec<Link>, ApiError> {
        self.client
            .execute_json(&Self::upcoming_request(page, sort))
            .await
    }
}

/// Operations on a single link.
#[derive(Debug, Clone, Copy)]
pub struct LinkResource<'a> {
    client: &'a Client,
}

impl<'a> LinkResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Request for `link/index/{id}`; sent with the user key.
    #[must_use]
    pub fn index_request(id: i64) -> ApiRequest {
        ApiRequest::get("link", "index")
            .method_param(ID_PARAM, id)
            .with_user_auth()
    }

    /// Request for `link/digs/{id}`.
    #[must_use]
    pub fn digs_request(id: i64) -> ApiRequest {
        ApiRequest::get("link", "digs").method_param(ID_PARAM, id)
    }

    /// Full link details, including user state.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the client pipeline.
    #[instrument(level = "debug", skip(self))]
    pub async fn index(&self, id: i64) -> Result<Link, ApiError> {
        self.client.execute_json(&Self::index_request(id)).await
    }

    /// Users who dug the link.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the client pipeline.
    #[instrument(level = "debug", skip(self))]
    pub async fn digs(&self, id: i64) -> Result<Vec<Dig>, ApiError> {
        self.client.execute_json(&Self::digs_request(id)).await
    }

    /// Comments under the link.
    ///
    /// # Errors
    ///
    /// Always returns [`ApiError::NotImplemented`].
    #[allow(clippy::unused_async)]
    pub async fn comments(&self, _id: i64) -> Result<Vec<Comment>, ApiError> {
        Err(ApiError::not_implemented("link/comments"))
    }

    /// Buries of the link.
    ///
    /// # Errors
    ///
    /// Always returns [`ApiError::NotImplemented`].
    #[allow(clippy::unused_async)]
    pub async fn reports(&self, _id: i64) -> Result<Vec<Bury>, ApiError> {
        Err(ApiError::not_implemented("link/reports"))
    }

    /// Links related to the link.
    ///
    /// # Errors
    ///
    /// Always returns [`ApiError::NotImplemented`].
    #[allow(clippy::unused_async)]
    pub async fn related(&self, _id: i64) -> Result<Vec<RelatedLink>, ApiError> {
        Err(ApiError::not_implemented("link/related"))
    }

    /// Catalogue of bury reasons.
    ///
    /// # Errors
    ///
    /// Always returns [`ApiError::NotImplemented`].
    #[allow(clippy::unused_async)]
    pub async fn bury_reasons(&self) -> Result<(), ApiError> {
        Err(ApiError::not_implemented("link/buryreasons"))
    }
}
