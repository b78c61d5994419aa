use async_trait::async_trait;

use crate::anime::Anime;

use super::Result;

/// Repository for anime records keyed by id.
#[async_trait]
pub trait AnimeRepository: Send + Sync {
    /// Gets a record by its id. A missing record is `Ok(None)`.
    async fn get_anime(&self, id: &str) -> Result<Option<Anime>>;

    /// Writes a record, replacing any existing record with the same id.
    async fn insert_anime(&self, anime: &Anime) -> Result<()>;

    /// Deletes a record by its id. Deleting a missing record succeeds.
    async fn delete_anime(&self, id: &str) -> Result<()>;
}
