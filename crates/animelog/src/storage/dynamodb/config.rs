//! Table configuration types (Functional Core - pure data).

use std::time::Duration;

/// Default provisioned read and write capacity units.
pub const DEFAULT_CAPACITY_UNITS: i64 = 5;

/// Default upper bound on waiting for a table to become active.
pub const DEFAULT_ACTIVATION_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Default delay between table status checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Table schema and provisioning configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
    pub activation_timeout: Duration,
    pub poll_interval: Duration,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }

    /// Sets the provisioned read and write capacity units.
    pub fn with_capacity(mut self, read: i64, write: i64) -> Self {
        self.read_capacity_units = read;
        self.write_capacity_units = write;
        self
    }

    /// Sets how long to wait for the table to become active.
    pub fn with_activation_timeout(mut self, timeout: Duration) -> Self {
        self.activation_timeout = timeout;
        self
    }
}

/// Returns the canonical table configuration for anime records.
/// This is a pure function - no I/O.
pub fn anime_table_config() -> TableConfig {
    TableConfig {
        table_name: "anime".to_string(),
        partition_key: KeyAttribute {
            name: "id".to_string(),
            attribute_type: AttributeType::String,
        },
        read_capacity_units: DEFAULT_CAPACITY_UNITS,
        write_capacity_units: DEFAULT_CAPACITY_UNITS,
        activation_timeout: DEFAULT_ACTIVATION_TIMEOUT,
        poll_interval: DEFAULT_POLL_INTERVAL,
    }
}
