// Store settings are only read by the DynamoDB backend.
#![cfg_attr(not(feature = "dynamodb"), allow(dead_code))]

use std::{env, str::FromStr, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding anime records (default: "anime")
    pub table_name: String,
    /// DynamoDB endpoint override (default: "http://localhost:8000")
    pub endpoint_url: Option<String>,
    /// AWS region (default: "localhost")
    pub region: String,
    /// AWS shared config profile (default: "default")
    pub profile: Option<String>,
    /// Provisioned read capacity units for a newly created table (default: 5)
    pub read_capacity_units: i64,
    /// Provisioned write capacity units for a newly created table (default: 5)
    pub write_capacity_units: i64,
    /// Seconds to wait for the table to become active (default: 300)
    pub table_activation_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "anime")
    /// - `AWS_ENDPOINT_URL` - Endpoint override, empty for the AWS default (default: "http://localhost:8000")
    /// - `AWS_REGION` - AWS region (default: "localhost")
    /// - `AWS_PROFILE` - Credentials profile, empty for the default chain (default: "default")
    /// - `TABLE_READ_CAPACITY` - Read capacity units (default: 5)
    /// - `TABLE_WRITE_CAPACITY` - Write capacity units (default: 5)
    /// - `TABLE_ACTIVATION_TIMEOUT_SECONDS` - Provisioning wait bound (default: 300)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let optional = |key: &str, default: &str| {
            let value = lookup(key).unwrap_or_else(|| default.to_string());
            (!value.is_empty()).then_some(value)
        };

        Self {
            table_name: lookup("DYNAMODB_TABLE_NAME").unwrap_or_else(|| "anime".to_string()),
            endpoint_url: optional("AWS_ENDPOINT_URL", "http://localhost:8000"),
            region: lookup("AWS_REGION").unwrap_or_else(|| "localhost".to_string()),
            profile: optional("AWS_PROFILE", "default"),
            read_capacity_units: parse_or(lookup("TABLE_READ_CAPACITY"), 5),
            write_capacity_units: parse_or(lookup("TABLE_WRITE_CAPACITY"), 5),
            table_activation_timeout_seconds: parse_or(
                lookup("TABLE_ACTIVATION_TIMEOUT_SECONDS"),
                300,
            ),
        }
    }

    /// Get the table activation timeout as a Duration.
    pub fn table_activation_timeout(&self) -> Duration {
        Duration::from_secs(self.table_activation_timeout_seconds)
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
