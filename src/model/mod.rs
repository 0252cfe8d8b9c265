//! Data-transfer objects decoded from API responses.
//!
//! These are plain serde records; every field defaults when the API omits it
//! or sends `null`.
//! Cross-references (e.g. the parent link of a comment) are kept as the raw
//! placeholder values the API sends, not as object graphs.

mod activity;
mod author;
mod de;
mod link;
mod user_group;

pub use activity::{Bury, Comment, Dig, Embed};
pub use author::AuthorInfo;
pub use link::{Link, RelatedLink};
pub use user_group::UserGroup;

use serde::{Deserialize, Serialize};

/// Error payload the API sends inside a [`WrappedError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    #[serde(deserialize_with = "de::null_as_default")]
    pub code: i32,
    #[serde(deserialize_with = "de::null_as_default")]
    pub message: String,
}

/// `{"error": {...}}` envelope. Never interpreted by the client; decode into it
/// explicitly when a call is expected to fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrappedError {
    pub error: ErrorBody,
}
