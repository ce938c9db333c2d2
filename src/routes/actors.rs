use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{error::AppResult, models::JsonObject, routes::AppState, services::catalog};

#[derive(Debug, Deserialize)]
pub struct ActorSearchQuery {
    query: Option<String>,
}

/// Handler for person search
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<ActorSearchQuery>,
) -> AppResult<Json<JsonObject>> {
    let query = params.query.unwrap_or_default();

    tracing::info!(query = %query, "Searching actors");

    let people = catalog::search_actors(state.movie_db.clone(), &query).await?;
    Ok(Json(people))
}
