//! API request types for anime operations.

use serde::{Deserialize, Serialize};

use super::types::{generate_anime_id, Anime};
use crate::serde::null_as_default;

/// Request payload for creating a new anime record.
///
/// Carries every field of [`Anime`] except the server-assigned `id`.
/// Missing or `null` fields decode to their zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateAnimeRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

impl CreateAnimeRequest {
    /// Builds the record to persist, assigning a fresh id.
    pub fn to_anime(&self) -> Anime {
        self.to_anime_with_id(generate_anime_id())
    }

    /// Builds the record to persist using the given id.
    pub fn to_anime_with_id(&self, id: impl Into<String>) -> Anime {
        Anime {
            id: id.into(),
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year,
            status: self.status.clone(),
        }
    }
}
