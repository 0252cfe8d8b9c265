//! Lenient field decoders for API records.
//!
//! The API sends `null` for blank fields and `false` for an absent vote, where
//! the records use plain values.

use serde::{Deserialize, Deserializer};

/// Decodes `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decodes a vote marker that is either a string (`dig`, `bury`) or `false`.
pub(crate) fn string_or_false<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Marker {
        Text(String),
        Flag(bool),
    }

    Ok(match Option::<Marker>::deserialize(deserializer)? {
        Some(Marker::Text(value)) => Some(value),
        Some(Marker::Flag(_)) | None => None,
    })
}
