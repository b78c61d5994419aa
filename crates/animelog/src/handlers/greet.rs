use axum::Json;
use serde::{Deserialize, Serialize};

/// Fixed greeting payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

/// GET /greet - Returns `{"message": "Hello"}`.
///
/// Does not touch storage and ignores the request entirely.
pub async fn greet() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello".to_string(),
    })
}
