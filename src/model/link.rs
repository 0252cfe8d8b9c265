//! Link objects returned by the `links` and `link` resources.

use serde::{Deserialize, Serialize};

use super::AuthorInfo;
use super::de::{null_as_default, string_or_false};

/// A submitted link.
///
/// Fields under "user state" are filled only when the request carried a
/// user key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: String,
    /// Address of the link page on wykop.pl.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Address the link points to.
    #[serde(deserialize_with = "null_as_default")]
    pub source_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vote_count: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub comment_count: i32,
    /// Number of buries.
    #[serde(deserialize_with = "null_as_default")]
    pub report_count: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,

    #[serde(flatten)]
    pub author_info: AuthorInfo,

    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub group: String,
    /// Thumbnail URL.
    #[serde(deserialize_with = "null_as_default")]
    pub preview: String,
    /// Favourite lists containing this link.
    #[serde(deserialize_with = "null_as_default")]
    pub user_lists: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub plus18: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub can_vote: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_hot: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_own_content: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category_name: String,

    // user state
    /// `dig` or `bury` when the user voted; the API sends `false` otherwise.
    #[serde(deserialize_with = "string_or_false")]
    pub user_vote: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub user_observe: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub user_favorite: bool,
    pub violation_url: Option<String>,
    pub info: Option<String>,
    pub app: Option<String>,
    pub own_content: Option<String>,
}

/// A link attached to another link (`link/related`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedLink {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub plus18: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub vote_count: i32,
    /// Visits coming from this link (trackbacks).
    #[serde(deserialize_with = "null_as_default")]
    pub entry_count: i32,
    /// `1`, `-1` or absent when the user has not voted.
    pub user_vote: Option<i32>,

    #[serde(flatten)]
    pub author_info: AuthorInfo,

    /// Parent link placeholder, only sent by `profile/related`.
    pub link: Option<String>,
}
