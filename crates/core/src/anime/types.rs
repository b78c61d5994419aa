use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted anime record.
///
/// `id` is assigned by the server when the record is created and is the
/// only key used to locate it in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anime {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: i64,
    /// Free-form watch status such as "watching" or "completed".
    pub status: String,
}

impl Anime {
    /// Creates a new anime record with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_anime_id(),
            title: title.into(),
            author: author.into(),
            year,
            status: status.into(),
        }
    }

    /// Replaces the generated id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Generates a new random record id (UUID v4, hyphenated).
pub fn generate_anime_id() -> String {
    Uuid::new_v4().to_string()
}
