//! Anime record handlers.
//!
//! Each handler performs at most one repository call and produces exactly
//! one response, either its success payload or an [`ApiError`].

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use animelog_core::anime::{Anime, CreateAnimeRequest};

use crate::{handlers::ApiError, state::AppState};

/// Create a new record (POST /anime).
///
/// The body is decoded as JSON whatever its content type. On success the
/// submitted request is echoed back, and the generated id is exposed through
/// the `Location` header.
pub async fn create_anime(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = body.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let request: CreateAnimeRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    tracing::debug!(request = ?request, "Received create anime request");

    let anime = request.to_anime();

    state.anime_repo.insert_anime(&anime).await.map_err(|e| {
        tracing::error!(anime_id = %anime.id, error = %e, "Failed to insert anime");
        ApiError::InsertFailed
    })?;

    tracing::info!(anime_id = %anime.id, title = %anime.title, "Created new anime");

    let location = format!("/anime/{}", anime.id);
    Ok(([(header::LOCATION, location)], Json(request)))
}

/// Get a single record by id (GET /anime/{id}).
pub async fn get_anime(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Anime>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let anime = state.anime_repo.get_anime(&id).await.map_err(|e| {
        tracing::error!(anime_id = %id, error = %e, "Failed to get anime");
        ApiError::LookupFailed
    })?;

    anime.map(Json).ok_or(ApiError::NotFound)
}

/// Delete a record by id (DELETE /anime/{id}).
///
/// Deleting an id that does not exist also answers 204.
pub async fn delete_anime(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    state.anime_repo.delete_anime(&id).await.map_err(|e| {
        tracing::error!(anime_id = %id, error = %e, "Failed to delete anime");
        ApiError::DeleteFailed
    })?;

    tracing::info!(anime_id = %id, "Deleted anime");
    Ok(StatusCode::NO_CONTENT)
}
