//! AWS SDK client setup (Imperative Shell).

use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::TableStatus as SdkTableStatus;
use aws_sdk_dynamodb::Client;

use super::error::ProvisionError;
use super::planning::TableStatus;

/// AWS client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsConfig {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region.
    pub region: String,
    /// Shared config profile used for credentials.
    pub profile: Option<String>,
}

impl AwsConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

/// Creates a DynamoDB client with the given configuration.
pub async fn create_client(config: &AwsConfig) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(profile) = &config.profile {
        sdk_config_loader = sdk_config_loader.profile_name(profile);
    }

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}

/// Fetches the current table status, returns None if the table doesn't exist.
pub async fn get_table_status(
    client: &Client,
    table_name: &str,
) -> Result<Option<TableStatus>, ProvisionError> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => {
            let table = response
                .table()
                .ok_or_else(|| ProvisionError::MissingTableDescription {
                    table_name: table_name.to_string(),
                })?;

            Ok(Some(to_table_status(table.table_status())))
        }
        Err(err) => match err.into_service_error() {
            DescribeTableError::ResourceNotFoundException(_) => Ok(None),
            err => Err(ProvisionError::AwsSdk(format!(
                "DescribeTable failed: {:?}",
                err
            ))),
        },
    }
}

fn to_table_status(status: Option<&SdkTableStatus>) -> TableStatus {
    match status {
        Some(SdkTableStatus::Active) => TableStatus::Active,
        Some(SdkTableStatus::Creating) => TableStatus::Creating,
        Some(SdkTableStatus::Updating) => TableStatus::Updating,
        Some(SdkTableStatus::Deleting) => TableStatus::Deleting,
        // No status yet, treat as still being created.
        None => TableStatus::Creating,
        Some(_) => TableStatus::Unavailable,
    }
}
