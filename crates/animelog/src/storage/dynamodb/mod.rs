//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository
//! trait using `aws-sdk-dynamodb`, plus the startup provisioning that makes
//! sure the backing table exists and is active.

mod client;
mod config;
mod conversions;
mod error;
mod planning;
mod provision;
mod repository;
#[cfg(test)]
mod test_support;

pub use client::{create_client, AwsConfig};
pub use config::anime_table_config;
pub use repository::DynamoDbRepository;
