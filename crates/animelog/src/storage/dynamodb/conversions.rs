//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! domain types. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use animelog_core::anime::Anime;
use animelog_core::storage::RepositoryError;

/// Name of the partition key attribute.
pub const ID_ATTRIBUTE: &str = "id";

/// Convert an Anime to DynamoDB item.
pub fn anime_to_item(anime: &Anime) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(ID_ATTRIBUTE.to_string(), AttributeValue::S(anime.id.clone()));
    item.insert("title".to_string(), AttributeValue::S(anime.title.clone()));
    item.insert("author".to_string(), AttributeValue::S(anime.author.clone()));
    item.insert("year".to_string(), AttributeValue::N(anime.year.to_string()));
    item.insert("status".to_string(), AttributeValue::S(anime.status.clone()));

    item
}

/// Convert a DynamoDB item to Anime.
pub fn item_to_anime(item: &HashMap<String, AttributeValue>) -> Result<Anime, RepositoryError> {
    Ok(Anime {
        id: get_string(item, ID_ATTRIBUTE)?,
        title: get_string(item, "title")?,
        author: get_string(item, "author")?,
        year: get_i64(item, "year")?,
        status: get_string(item, "status")?,
    })
}

/// Build the primary key for a lookup or delete.
pub fn anime_key(id: &str) -> (String, AttributeValue) {
    (ID_ATTRIBUTE.to_string(), AttributeValue::S(id.to_string()))
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required numeric attribute that fits in an i64.
fn get_i64(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i64, RepositoryError> {
    let n = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| {
            RepositoryError::InvalidData(format!("Missing or invalid field: {}", key))
        })?;
    n.parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}
