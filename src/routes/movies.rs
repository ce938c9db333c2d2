use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{JsonObject, MoviePage, MovieQuery},
    routes::AppState,
    services::catalog,
};

/// Raw `/movies` query string; every value is optional and taken verbatim
#[derive(Debug, Default, Deserialize)]
pub struct ListMoviesParams {
    page: Option<String>,
    query: Option<String>,
    genre: Option<String>,
    actors: Option<String>,
}

impl From<ListMoviesParams> for MovieQuery {
    fn from(params: ListMoviesParams) -> Self {
        MovieQuery::from_raw(
            params.page.as_deref(),
            params.query,
            params.genre,
            params.actors,
        )
    }
}

/// Handler for movie listing: discover with filters, or free-text search
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListMoviesParams>,
) -> AppResult<Json<MoviePage>> {
    let query = MovieQuery::from(params);

    tracing::info!(
        page = query.page,
        search = query.query.is_some(),
        genre = ?query.genre,
        actors = ?query.actors,
        "Listing movies"
    );

    let page = catalog::list_movies(state.movie_db.clone(), &query).await?;
    Ok(Json(page))
}

/// Handler for single-movie lookup by external ID
///
/// Also mounted on `/find/` so a missing ID yields 400 instead of 404.
/// An ID that is present but does not decode is reported as invalid.
pub async fn find(
    State(state): State<AppState>,
    external_id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<JsonObject>> {
    let external_id = match external_id {
        Ok(Path(id)) => id,
        Err(PathRejection::MissingPathParams(_)) => String::new(),
        Err(rejection) => {
            return Err(AppError::InvalidInput(format!(
                "Invalid external ID: {}",
                rejection.body_text()
            )))
        }
    };

    tracing::info!(external_id = %external_id, "Looking up movie");

    let movie = catalog::find_movie(state.movie_db.clone(), &external_id).await?;
    Ok(Json(movie))
}
