//! Table provisioning operations (Imperative Shell).

use std::future::Future;
use std::time::Duration;

use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ProvisionedThroughput,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use tokio::time::Instant;

use super::client;
use super::config::{AttributeType, TableConfig};
use super::error::ProvisionError;
use super::planning::{calculate_provision_plan, ProvisionPlan, TableStatus};

/// Ensures the configured table exists and is active.
///
/// Safe to call repeatedly: an active table is left untouched and a table
/// created concurrently by another process is awaited instead of recreated.
pub async fn ensure_table(
    client: &Client,
    config: &TableConfig,
) -> Result<ProvisionPlan, ProvisionError> {
    let current = client::get_table_status(client, &config.table_name).await?;
    let plan = calculate_provision_plan(current, &config.table_name);

    tracing::info!(table = %config.table_name, plan = %plan, "Provisioning table");

    execute_provision_plan(client, config, &plan).await?;
    Ok(plan)
}

async fn execute_provision_plan(
    client: &Client,
    config: &TableConfig,
    plan: &ProvisionPlan,
) -> Result<(), ProvisionError> {
    match plan {
        ProvisionPlan::CreateTable { .. } => {
            create_table(client, config).await?;
            wait_for_active(client, config).await?;
        }
        ProvisionPlan::WaitForActive { .. } => {
            wait_for_active(client, config).await?;
        }
        ProvisionPlan::NoChanges { .. } => {
            // Nothing to do
        }
        ProvisionPlan::Unusable { table_name, status } => {
            return Err(ProvisionError::TableUnusable {
                table_name: table_name.clone(),
                status: *status,
            });
        }
    }
    Ok(())
}

async fn create_table(client: &Client, config: &TableConfig) -> Result<(), ProvisionError> {
    let key_schema = KeySchemaElement::builder()
        .attribute_name(&config.partition_key.name)
        .key_type(KeyType::Hash)
        .build()
        .map_err(|e| ProvisionError::AwsSdk(e.to_string()))?;

    let attribute_definition = AttributeDefinition::builder()
        .attribute_name(&config.partition_key.name)
        .attribute_type(to_scalar_type(&config.partition_key.attribute_type))
        .build()
        .map_err(|e| ProvisionError::AwsSdk(e.to_string()))?;

    let throughput = ProvisionedThroughput::builder()
        .read_capacity_units(config.read_capacity_units)
        .write_capacity_units(config.write_capacity_units)
        .build()
        .map_err(|e| ProvisionError::AwsSdk(e.to_string()))?;

    let result = client
        .create_table()
        .table_name(&config.table_name)
        .key_schema(key_schema)
        .attribute_definitions(attribute_definition)
        .billing_mode(BillingMode::Provisioned)
        .provisioned_throughput(throughput)
        .send()
        .await;

    match result {
        Ok(_) => {
            tracing::info!(table = %config.table_name, "Table creation requested");
            Ok(())
        }
        Err(err) => match err.into_service_error() {
            CreateTableError::ResourceInUseException(_) => {
                tracing::info!(table = %config.table_name, "Table already exists");
                Ok(())
            }
            err => Err(ProvisionError::AwsSdk(format!("CreateTable failed: {:?}", err))),
        },
    }
}

async fn wait_for_active(client: &Client, config: &TableConfig) -> Result<(), ProvisionError> {
    let table_name = config.table_name.as_str();
    poll_until_active(
        table_name,
        config.activation_timeout,
        config.poll_interval,
        move || client::get_table_status(client, table_name),
    )
    .await?;

    tracing::info!(table = %config.table_name, "Table is active");
    Ok(())
}

/// Polls `check_status` until it reports an active table or `timeout` elapses.
///
/// Status check errors abort the wait immediately.
pub async fn poll_until_active<F, Fut>(
    table_name: &str,
    timeout: Duration,
    interval: Duration,
    mut check_status: F,
) -> Result<(), ProvisionError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<TableStatus>, ProvisionError>>,
{
    let started = Instant::now();
    let deadline = started + timeout;

    loop {
        let status = check_status().await?;
        if status == Some(TableStatus::Active) {
            return Ok(());
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(ProvisionError::TableActivationTimeout {
                table_name: table_name.to_string(),
                waited: now - started,
            });
        }

        tracing::debug!(table = %table_name, ?status, "Waiting for table to become active");
        tokio::time::sleep(interval.min(deadline - now)).await;
    }
}

fn to_scalar_type(attr_type: &AttributeType) -> ScalarAttributeType {
    match attr_type {
        AttributeType::String => ScalarAttributeType::S,
    }
}
