//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use animelog_core::anime::Anime;
use animelog_core::storage::{AnimeRepository, Result};

/// In-memory storage backend.
///
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    anime: Arc<RwLock<HashMap<String, Anime>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[cfg(test)]
    pub async fn count(&self) -> usize {
        self.anime.read().await.len()
    }
}

#[async_trait]
impl AnimeRepository for InMemoryRepository {
    async fn get_anime(&self, id: &str) -> Result<Option<Anime>> {
        let anime = self.anime.read().await;
        Ok(anime.get(id).cloned())
    }

    async fn insert_anime(&self, anime: &Anime) -> Result<()> {
        let mut records = self.anime.write().await;
        records.insert(anime.id.clone(), anime.clone());
        Ok(())
    }

    async fn delete_anime(&self, id: &str) -> Result<()> {
        let mut records = self.anime.write().await;
        records.remove(id);
        Ok(())
    }
}
