use axum::{extract::State, Json};

use crate::{error::AppResult, models::JsonObject, routes::AppState, services::catalog};

/// Handler for the movie genre list
pub async fn list(State(state): State<AppState>) -> AppResult<Json<JsonObject>> {
    let genres = catalog::list_genres(state.movie_db.clone()).await?;
    Ok(Json(genres))
}
