//! Author attributes shared by links, comments, digs and buries.

use serde::{Deserialize, Serialize};

use super::UserGroup;
use super::de::null_as_default;

/// Author display attributes embedded in several API objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorInfo {
    /// Author login.
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    /// Avatar URL.
    #[serde(deserialize_with = "null_as_default")]
    pub author_avatar: String,
    /// Large avatar URL.
    #[serde(deserialize_with = "null_as_default")]
    pub author_avatar_big: String,
    /// Medium avatar URL.
    #[serde(deserialize_with = "null_as_default")]
    pub author_avatar_med: String,
    /// Small avatar URL.
    #[serde(deserialize_with = "null_as_default")]
    pub author_avatar_lo: String,
    /// Author tier, when sent.
    pub author_group: Option<UserGroup>,
    /// `male`, `female` or empty.
    #[serde(deserialize_with = "null_as_default")]
    pub author_sex: String,
}
