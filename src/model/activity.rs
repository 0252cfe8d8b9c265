//! Per-user activity on a link: comments, digs and buries.

use serde::{Deserialize, Serialize};

use super::AuthorInfo;
use super::de::null_as_default;

/// A comment under a link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,

    #[serde(flatten)]
    pub author_info: AuthorInfo,

    #[serde(deserialize_with = "null_as_default")]
    pub vote_count: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    pub parent_id: Option<i64>,
    /// `own`, `new` or `readed`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Attached image or video.
    pub embed: Option<Embed>,
    /// Parent link placeholder, only sent by `profile/comments`.
    pub link: Option<String>,
}

/// Media attached to a comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Embed {
    /// `image` or `video`.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub preview: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub plus18: bool,
}

/// A single dig (up-vote).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dig {
    #[serde(flatten)]
    pub author_info: AuthorInfo,
}

/// A single bury (down-vote) with its reason code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bury {
    #[serde(deserialize_with = "null_as_default")]
    pub reason: i32,

    #[serde(flatten)]
    pub author_info: AuthorInfo,
}
