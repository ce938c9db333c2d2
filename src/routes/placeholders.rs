//! Routes that exist but have no behavior yet.
//!
//! They answer 501 with a fixed message instead of fabricated results.

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

type NotImplemented = (StatusCode, Json<Value>);

fn not_implemented(message: &str) -> NotImplemented {
    (StatusCode::NOT_IMPLEMENTED, Json(json!({ "message": message })))
}

/// Handler for `/search`; use `/movies?query=` for text search
pub async fn search_movies() -> NotImplemented {
    not_implemented("Movie search is not implemented")
}

/// Handler for `/filter`; use `/movies?genre=&actors=` for filtering
pub async fn filter_movies() -> NotImplemented {
    not_implemented("Movie filtering is not implemented")
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::create_test_server;
    use crate::services::providers::MockMovieDatabase;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_placeholders_report_not_implemented() {
        let server = create_test_server(MockMovieDatabase::new());

        let response = server.get("/search").await;
        response.assert_status(StatusCode::NOT_IMPLEMENTED);
        response.assert_json(&json!({ "message": "Movie search is not implemented" }));

        let response = server.get("/filter").await;
        response.assert_status(StatusCode::NOT_IMPLEMENTED);
        response.assert_json(&json!({ "message": "Movie filtering is not implemented" }));
    }
}
