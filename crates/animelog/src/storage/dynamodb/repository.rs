//! DynamoDB repository implementation.
//!
//! Implements `AnimeRepository` from `animelog_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use animelog_core::anime::Anime;
use animelog_core::storage::{AnimeRepository, Result};

use super::config::TableConfig;
use super::conversions::{anime_key, anime_to_item, item_to_anime};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error, ProvisionError};
use super::planning::ProvisionPlan;
use super::provision;

/// DynamoDB-based repository implementation.
///
/// The SDK client is cheap to clone and safe to share between requests.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Creates the backing table if needed and waits until it is active.
    pub async fn ensure_table(
        &self,
        config: &TableConfig,
    ) -> std::result::Result<ProvisionPlan, ProvisionError> {
        provision::ensure_table(&self.client, config).await
    }
}

#[async_trait]
impl AnimeRepository for DynamoDbRepository {
    async fn get_anime(&self, id: &str) -> Result<Option<Anime>> {
        let (key, value) = anime_key(id);
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(key, value)
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| map_get_item_error(e, id))?;

        match result.item {
            Some(item) => Ok(Some(item_to_anime(&item)?)),
            None => Ok(None),
        }
    }

    async fn insert_anime(&self, anime: &Anime) -> Result<()> {
        let item = anime_to_item(anime);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &anime.id))?;

        Ok(())
    }

    async fn delete_anime(&self, id: &str) -> Result<()> {
        let (key, value) = anime_key(id);

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(key, value)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, id))?;

        Ok(())
    }
}
