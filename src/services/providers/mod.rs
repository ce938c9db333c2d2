/// Movie database provider abstraction
///
/// Handlers never talk to the upstream HTTP API directly. They go through
/// [`MovieDatabase`], which the TMDb client implements and tests mock.
use axum::http::StatusCode;

use crate::models::{JsonObject, MovieQuery, TmdbMovieList};

pub mod tmdb;

pub use tmdb::TmdbClient;

/// Failure of a single upstream call
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    /// DNS, connect or body read failure
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream returned status {0}")]
    Status(StatusCode),

    /// Body was not the JSON we expected
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error("invalid upstream URL: {0}")]
    InvalidUrl(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Trait for movie metadata providers
///
/// Each method performs at most one upstream request and never retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieDatabase: Send + Sync {
    /// Discover or search movies
    ///
    /// A non-empty text query selects search mode, in which genre and cast
    /// filters are ignored.
    async fn list_movies(&self, query: &MovieQuery) -> ProviderResult<TmdbMovieList>;

    /// Look up a single movie by its external identifier
    async fn movie_by_external_id(&self, external_id: &str) -> ProviderResult<JsonObject>;

    /// Fetch the movie genre list
    async fn genres(&self) -> ProviderResult<JsonObject>;

    /// Search people by name
    async fn search_people(&self, query: &str) -> ProviderResult<JsonObject>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
