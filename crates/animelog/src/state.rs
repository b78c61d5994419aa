//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage is injected as a repository trait object, so
//! handlers never reach for a process-wide client.

use std::sync::Arc;

use animelog_core::storage::AnimeRepository;

/// Shared application state.
///
/// Cloned for each request handler. The repository is the only shared
/// resource and is safe for concurrent use on its own.
#[derive(Clone)]
pub struct AppState {
    /// Anime repository (DynamoDB or in-memory, depending on features).
    pub anime_repo: Arc<dyn AnimeRepository>,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn with_repository(anime_repo: Arc<dyn AnimeRepository>) -> Self {
        Self { anime_repo }
    }
}

// ============================================================================
// Factory functions for the different storage backends
// ============================================================================

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use anyhow::Context;

    use super::*;
    use crate::config::Config;
    use crate::storage::dynamodb::{anime_table_config, create_client, AwsConfig};
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        ///
        /// Provisions the table before returning; a table that cannot be
        /// created or never becomes active is a startup failure.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = AwsConfig {
                endpoint_url: config.endpoint_url.clone(),
                region: config.region.clone(),
                profile: config.profile.clone(),
            };
            let table_config = anime_table_config()
                .with_table_name(&config.table_name)
                .with_capacity(config.read_capacity_units, config.write_capacity_units)
                .with_activation_timeout(config.table_activation_timeout());

            tracing::info!(target_env = %aws_config.target_display(), "Connecting to DynamoDB");

            let client = create_client(&aws_config).await;
            let repo = DynamoDbRepository::new(client, &table_config.table_name);

            repo.ensure_table(&table_config)
                .await
                .with_context(|| format!("failed to provision table '{}'", repo.table_name()))?;

            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::config::Config;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::warn!("Using in-memory storage, records are lost on shutdown");
            Ok(Self::with_repository(Arc::new(InMemoryRepository::new())))
        }
    }
}

#[cfg(any(test, feature = "inmemory"))]
impl Default for AppState {
    fn default() -> Self {
        Self::with_repository(Arc::new(crate::storage::InMemoryRepository::new()))
    }
}
