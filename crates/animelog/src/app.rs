use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        anime::{create_anime, delete_anime, get_anime},
        error::{method_not_allowed, route_not_found},
        greet::greet,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/greet", get(greet).fallback(method_not_allowed))
        .route("/anime", post(create_anime).fallback(method_not_allowed))
        .route(
            "/anime/{id}",
            get(get_anime)
                .delete(delete_anime)
                .fallback(method_not_allowed),
        )
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use animelog_core::anime::Anime;
    use animelog_core::storage::{AnimeRepository, RepositoryError, Result as RepoResult};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::storage::InMemoryRepository;

    const NARUTO: &str =
        r#"{"title":"Naruto","author":"Kishimoto","year":2002,"status":"completed"}"#;

    /// Repository whose every call fails, to exercise error paths.
    struct FailingRepository;

    #[async_trait]
    impl AnimeRepository for FailingRepository {
        async fn get_anime(&self, _id: &str) -> RepoResult<Option<Anime>> {
            Err(RepositoryError::ConnectionFailed("unreachable".to_string()))
        }

        async fn insert_anime(&self, _anime: &Anime) -> RepoResult<()> {
            Err(RepositoryError::QueryFailed("Table not found".to_string()))
        }

        async fn delete_anime(&self, _id: &str) -> RepoResult<()> {
            Err(RepositoryError::QueryFailed("Table not found".to_string()))
        }
    }

    fn failing_app() -> Router {
        create_app(AppState::with_repository(Arc::new(FailingRepository)))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    fn post_anime(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/anime")
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_greet() {
        let app = create_app(AppState::default());

        let response = app.oneshot(get_request("/greet")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Hello"})
        );
    }

    #[tokio::test]
    async fn test_greet_ignores_body_and_headers() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/greet")
                    .header("X-Anything", "value")
                    .body(Body::from("not json at all"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Hello"})
        );
    }

    #[tokio::test]
    async fn test_create_echoes_request() {
        let app = create_app(AppState::default());

        let response = app.oneshot(post_anime(NARUTO)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "title": "Naruto",
                "author": "Kishimoto",
                "year": 2002,
                "status": "completed"
            })
        );
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let repo = Arc::new(InMemoryRepository::new());
        let app = create_app(AppState::with_repository(repo.clone()));

        let response = app.clone().oneshot(post_anime(NARUTO)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(location.starts_with("/anime/"));
        assert_eq!(repo.count().await, 1);

        let response = app.oneshot(get_request(&location)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let anime: Anime = serde_json::from_value(body_json(response).await).unwrap();
        assert!(!anime.id.is_empty());
        assert_eq!(location, format!("/anime/{}", anime.id));
        assert_eq!(anime.title, "Naruto");
        assert_eq!(anime.author, "Kishimoto");
        assert_eq!(anime.year, 2002);
        assert_eq!(anime.status, "completed");
    }

    #[tokio::test]
    async fn test_create_without_content_type() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/anime")
                    .body(Body::from(NARUTO))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let app = create_app(AppState::default());

        let mut locations = std::collections::HashSet::new();
        for _ in 0..10 {
            let response = app.clone().oneshot(post_anime(NARUTO)).await.unwrap();
            let location = response.headers().get(header::LOCATION).unwrap().clone();
            locations.insert(location);
        }

        assert_eq!(locations.len(), 10);
    }

    #[tokio::test]
    async fn test_create_malformed_json() {
        let app = create_app(AppState::default());

        for body in ["{", "not json", r#"{"year":"2002"}"#, ""] {
            let response = app.clone().oneshot(post_anime(body)).await.unwrap();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let json = body_json(response).await;
            assert!(!json["error"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_create_insert_failure_hides_store_error() {
        let response = failing_app().oneshot(post_anime(NARUTO)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "failed to save anime"})
        );
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(get_request("/anime/00000000-0000-0000-0000-000000000000"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "id is invalid"})
        );
    }

    #[tokio::test]
    async fn test_get_storage_failure() {
        let response = failing_app()
            .oneshot(get_request("/anime/some-id"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "id must be an uuid or id does not exist in DB"})
        );
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = Arc::new(InMemoryRepository::new());
        let anime = Anime::new("Naruto", "Kishimoto", 2002, "completed");
        repo.insert_anime(&anime).await.unwrap();
        let app = create_app(AppState::with_repository(repo.clone()));

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("DELETE")
                        .uri(format!("/anime/{}", anime.id))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NO_CONTENT);
        }

        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn test_delete_storage_failure() {
        let response = failing_app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/anime/some-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "failed to delete anime"})
        );
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/anime/some-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "method not allowed"})
        );
    }

    #[tokio::test]
    async fn test_invalid_utf8_id_returns_json_error() {
        let app = create_app(AppState::default());

        for method in ["GET", "DELETE"] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri("/anime/%FF")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response.headers().get(header::CONTENT_TYPE).unwrap(),
                "application/json"
            );
            let json = body_json(response).await;
            assert!(json["error"].as_str().unwrap().contains("UTF-8"));
        }
    }

    #[tokio::test]
    async fn test_oversized_body_returns_json_error() {
        let app = create_app(AppState::default());
        let body = format!(r#"{{"title":"{}"}}"#, "a".repeat(3 * 1024 * 1024));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/anime")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let json = body_json(response).await;
        assert!(!json["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_accepts_year_beyond_32_bits() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(post_anime(
                r#"{"title":"a","author":"b","year":3000000000,"status":"c"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["year"], 3_000_000_000_i64);
    }

    #[tokio::test]
    async fn test_create_treats_null_fields_as_empty() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(post_anime(
                r#"{"title":null,"author":"b","year":null,"status":"c"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"title": "", "author": "b", "year": 0, "status": "c"})
        );
    }

    #[tokio::test]
    async fn test_collection_only_accepts_post() {
        let app = create_app(AppState::default());

        let response = app.oneshot(get_request("/anime")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "method not allowed"})
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = create_app(AppState::default());

        let response = app.oneshot(get_request("/nope")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "route not found"})
        );
    }
}
