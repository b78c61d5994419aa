//! Helpers for tests that talk to a running DynamoDB Local.
//!
//! Start one with `docker run -p 8000:8000 amazon/dynamodb-local`. Tests that
//! need it skip themselves when nothing answers on the endpoint.

use std::time::Duration;

use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_dynamodb::Client;

use animelog_core::anime::generate_anime_id;

use super::config::{anime_table_config, TableConfig};

/// Helper to get the DynamoDB Local endpoint from environment.
fn endpoint_url() -> String {
    std::env::var("AWS_ENDPOINT_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// Returns a client for DynamoDB Local, or None when it is not reachable.
pub async fn local_client() -> Option<Client> {
    let config = aws_sdk_dynamodb::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("localhost"))
        .endpoint_url(endpoint_url())
        .credentials_provider(Credentials::new("local", "local", None, None, "animelog-tests"))
        .build();
    let client = Client::from_conf(config);

    client.list_tables().limit(1).send().await.ok()?;
    Some(client)
}

/// Table config with a unique name so parallel tests never share a table.
pub fn unique_table_config(suffix: &str) -> TableConfig {
    let mut config = anime_table_config()
        .with_table_name(&format!("anime-test-{}-{}", suffix, generate_anime_id()))
        .with_activation_timeout(Duration::from_secs(30));
    config.poll_interval = Duration::from_millis(100);
    config
}

/// Best-effort cleanup of a table created by a test.
pub async fn drop_table(client: &Client, table_name: &str) {
    let _ = client.delete_table().table_name(table_name).send().await;
}
