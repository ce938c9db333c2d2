use std::sync::Arc;

use crate::{
    error::{AppError, AppResult, UpstreamContext},
    models::{JsonObject, MoviePage, MovieQuery},
    services::providers::MovieDatabase,
};

const MOVIES: UpstreamContext = UpstreamContext {
    resource: "movies",
    status_message: "Failed to fetch movies from TMDb API",
};

const MOVIE_DETAILS: UpstreamContext = UpstreamContext {
    resource: "movie details",
    status_message: "Movie not found",
};

const GENRES: UpstreamContext = UpstreamContext {
    resource: "genres",
    status_message: "Failed to fetch genres from TMDb API",
};

const ACTORS: UpstreamContext = UpstreamContext {
    resource: "actors",
    status_message: "Failed to fetch actors from TMDb API",
};

/// Lists movies via discover or search, reshaped for the client
pub async fn list_movies(
    provider: Arc<dyn MovieDatabase>,
    query: &MovieQuery,
) -> AppResult<MoviePage> {
    provider
        .list_movies(query)
        .await
        .map(MoviePage::from)
        .map_err(|e| AppError::from_provider(e, MOVIES))
}

/// Looks up one movie by external ID
///
/// An empty ID is rejected before the provider is called.
pub async fn find_movie(
    provider: Arc<dyn MovieDatabase>,
    external_id: &str,
) -> AppResult<JsonObject> {
    if external_id.is_empty() {
        return Err(AppError::InvalidInput("External ID is required".to_string()));
    }

    provider
        .movie_by_external_id(external_id)
        .await
        .map_err(|e| AppError::from_provider(e, MOVIE_DETAILS))
}

pub async fn list_genres(provider: Arc<dyn MovieDatabase>) -> AppResult<JsonObject> {
    provider
        .genres()
        .await
        .map_err(|e| AppError::from_provider(e, GENRES))
}

/// Searches people by name; the query is required
pub async fn search_actors(
    provider: Arc<dyn MovieDatabase>,
    query: &str,
) -> AppResult<JsonObject> {
    if query.is_empty() {
        return Err(AppError::InvalidInput(
            "Query parameter is required".to_string(),
        ));
    }

    provider
        .search_people(query)
        .await
        .map_err(|e| AppError::from_provider(e, ACTORS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Movie, TmdbMovieList};
    use crate::services::providers::{MockMovieDatabase, ProviderError};
    use axum::http::StatusCode;
    use serde_json::json;

    fn object(value: serde_json::Value) -> JsonObject {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[tokio::test]
    async fn test_list_movies_reshapes_page() {
        let mut mock = MockMovieDatabase::new();
        mock.expect_list_movies()
            .withf(|q| q.page == 2 && q.genre.as_deref() == Some("28"))
            .times(1)
            .returning(|_| {
                Ok(TmdbMovieList {
                    results: vec![Movie {
                        id: 1,
                        title: "Heat".to_string(),
                        rating: 7.9,
                        poster_path: None,
                    }],
                    total_pages: 4,
                    total_results: 70,
                })
            });

        let query = MovieQuery {
            page: 2,
            genre: Some("28".to_string()),
            ..MovieQuery::default()
        };
        let page = list_movies(Arc::new(mock), &query).await.unwrap();
        assert_eq!(page.movies[0].title, "Heat");
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total_items, 70);
    }

    #[tokio::test]
    async fn test_find_movie_empty_id_skips_provider() {
        let mut mock = MockMovieDatabase::new();
        mock.expect_movie_by_external_id().never();

        let err = find_movie(Arc::new(mock), "").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "External ID is required");
    }

    #[tokio::test]
    async fn test_find_movie_not_found_relays_status() {
        let mut mock = MockMovieDatabase::new();
        mock.expect_movie_by_external_id()
            .returning(|_| Err(ProviderError::Status(StatusCode::NOT_FOUND)));

        let err = find_movie(Arc::new(mock), "tt0000000").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Movie not found");
    }

    #[tokio::test]
    async fn test_find_movie_passes_object_through() {
        let mut mock = MockMovieDatabase::new();
        mock.expect_movie_by_external_id()
            .withf(|id| id == "tt1375666")
            .returning(|_| Ok(object(json!({"id": 27205, "title": "Inception"}))));

        let movie = find_movie(Arc::new(mock), "tt1375666").await.unwrap();
        assert_eq!(movie["title"], "Inception");
    }

    #[tokio::test]
    async fn test_search_actors_requires_query() {
        let mut mock = MockMovieDatabase::new();
        mock.expect_search_people().never();

        let err = search_actors(Arc::new(mock), "").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Query parameter is required");
    }

    #[tokio::test]
    async fn test_genres_upstream_failure_message() {
        let mut mock = MockMovieDatabase::new();
        mock.expect_genres()
            .returning(|| Err(ProviderError::Status(StatusCode::UNAUTHORIZED)));

        let err = list_genres(Arc::new(mock)).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "Failed to fetch genres from TMDb API");
    }

    #[tokio::test]
    async fn test_actors_decode_failure_is_internal() {
        let mut mock = MockMovieDatabase::new();
        mock.expect_search_people().returning(|_| {
            Err(ProviderError::Decode(
                serde_json::from_str::<serde_json::Value>("[1,").unwrap_err(),
            ))
        });

        let err = search_actors(Arc::new(mock), "Keanu").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
