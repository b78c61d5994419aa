//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `animelog_core::storage`,
//! and defines the errors raised while provisioning the table.

use std::fmt::Debug;
use std::time::Duration;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use thiserror::Error;

use animelog_core::storage::RepositoryError;

use super::planning::TableStatus;

/// Errors that can occur while ensuring the table exists.
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    #[error("DescribeTable returned no description for table '{table_name}'")]
    MissingTableDescription { table_name: String },

    #[error("Table '{table_name}' is {status:?} and cannot be used")]
    TableUnusable {
        table_name: String,
        status: TableStatus,
    },

    #[error("Timeout after {waited:?} waiting for table '{table_name}' to become active")]
    TableActivationTimeout { table_name: String, waited: Duration },
}

/// Returns a `ConnectionFailed` error for transport-level SDK failures.
fn connection_error<E, R>(err: &SdkError<E, R>) -> Option<RepositoryError> {
    match err {
        SdkError::TimeoutError(_) => Some(RepositoryError::ConnectionFailed(
            "Request to DynamoDB timed out".to_string(),
        )),
        SdkError::DispatchFailure(_) => Some(RepositoryError::ConnectionFailed(
            "Could not reach DynamoDB".to_string(),
        )),
        _ => None,
    }
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
    id: &str,
) -> RepositoryError {
    if let Some(err) = connection_error(&err) {
        return err;
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("GetItem failed for {}: {:?}", id, err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    id: &str,
) -> RepositoryError {
    if let Some(err) = connection_error(&err) {
        return err;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("PutItem failed for {}: {:?}", id, err)),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    id: &str,
) -> RepositoryError {
    if let Some(err) = connection_error(&err) {
        return err;
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        DeleteItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("DeleteItem failed for {}: {:?}", id, err)),
    }
}
