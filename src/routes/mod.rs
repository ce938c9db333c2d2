use axum::{
    http::StatusCode,
    middleware::from_fn,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{cors_middleware, make_span_with_request_id, request_id_middleware},
    services::MovieDatabase,
};

pub mod actors;
pub mod genres;
pub mod movies;
pub mod placeholders;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub movie_db: Arc<dyn MovieDatabase>,
}

impl AppState {
    pub fn new(movie_db: Arc<dyn MovieDatabase>) -> Self {
        Self { movie_db }
    }
}

/// Creates the application router with all routes
///
/// Layers, outermost first: request ID, tracing, CORS.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/movies", get(movies::list))
        .route("/find/", get(movies::find))
        .route("/find/:external_id", get(movies::find))
        .route("/search", get(placeholders::search_movies))
        .route("/filter", get(placeholders::filter_movies))
        .route("/genres", get(genres::list))
        .route("/actors", get(actors::search))
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(from_fn(cors_middleware)),
        )
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}


#[cfg(test)]
mod tests {
    use super::test_support::create_test_server;
    use crate::services::providers::MockMovieDatabase;
    use axum::http::Method;

    #[tokio::test]
    async fn test_health_check() {
        let server = create_test_server(MockMovieDatabase::new());
        let response = server.get("/health").await;
        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn test_preflight_never_reaches_provider() {
        let mut mock = MockMovieDatabase::new();
        mock.expect_list_movies().never();
        mock.expect_genres().never();
        mock.expect_search_people().never();
        mock.expect_movie_by_external_id().never();
        let server = create_test_server(mock);

        for path in ["/movies", "/genres", "/actors", "/find/tt1375666", "/search", "/filter"] {
            let response = server.method(Method::OPTIONS, path).await;
            response.assert_status_ok();
            response.assert_text("");
            assert_eq!(response.header("access-control-allow-origin"), "*");
            assert_eq!(
                response.header("access-control-allow-methods"),
                "GET, POST, PUT, DELETE, OPTIONS"
            );
            assert_eq!(
                response.header("access-control-allow-headers"),
                "Content-Type, Authorization"
            );
        }
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let server = create_test_server(MockMovieDatabase::new());
        let response = server.get("/health").await;
        assert!(!response.header("x-request-id").is_empty());
    }

    #[tokio::test]
    async fn test_preflight_carries_request_id() {
        let server = create_test_server(MockMovieDatabase::new());
        let id = "0b9f8c52-52a1-4a3e-8d0c-2f6a1f7e9b11";

        let response = server
            .method(Method::OPTIONS, "/movies")
            .add_header(
                axum::http::HeaderName::from_static("x-request-id"),
                axum::http::HeaderValue::from_static(id),
            )
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("x-request-id"), id);
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }
}
