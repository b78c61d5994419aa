//! Pure functions for deciding how to provision the table (Functional Core).

use std::fmt;

/// Table status as reported by DescribeTable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
    /// Archived, archiving, or missing encryption credentials.
    Unavailable,
}

/// Planned action for bringing the table to an active state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionPlan {
    /// Table doesn't exist, needs to be created and awaited.
    CreateTable { table_name: String },
    /// Table exists but is not active yet.
    WaitForActive { table_name: String },
    /// Table is active, nothing to do.
    NoChanges { table_name: String },
    /// Table exists in a state it cannot recover from on its own.
    Unusable {
        table_name: String,
        status: TableStatus,
    },
}

/// Pure function: Calculate what is needed to reach an active table.
pub fn calculate_provision_plan(current: Option<TableStatus>, table_name: &str) -> ProvisionPlan {
    let table_name = table_name.to_string();
    match current {
        None => ProvisionPlan::CreateTable { table_name },
        Some(TableStatus::Active) => ProvisionPlan::NoChanges { table_name },
        Some(TableStatus::Creating | TableStatus::Updating) => {
            ProvisionPlan::WaitForActive { table_name }
        }
        Some(status @ (TableStatus::Deleting | TableStatus::Unavailable)) => {
            ProvisionPlan::Unusable { table_name, status }
        }
    }
}

impl fmt::Display for ProvisionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisionPlan::CreateTable { table_name } => {
                write!(f, "+ Create table: {}", table_name)
            }
            ProvisionPlan::WaitForActive { table_name } => {
                write!(f, "~ Wait for table '{}' to become active", table_name)
            }
            ProvisionPlan::NoChanges { table_name } => {
                write!(f, "= Table '{}' is up to date", table_name)
            }
            ProvisionPlan::Unusable { table_name, status } => {
                write!(f, "! Table '{}' is {:?}", table_name, status)
            }
        }
    }
}
