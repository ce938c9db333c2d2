/// TMDb (The Movie Database) v3 API provider
///
/// URL layout:
/// - Listing: /discover/movie (page, with_genres, with_cast) or /search/movie (query, page)
/// - Single movie: /movie/{external_id}
/// - Genres: /genre/movie/list (language)
/// - People: /search/person (query)
///
/// Every request carries the API key as the `api_key` query parameter.
use reqwest::{Client as HttpClient, Url};
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    models::{JsonObject, MovieQuery, TmdbMovieList},
    services::providers::{MovieDatabase, ProviderError, ProviderResult},
};

#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    language: String,
}

impl TmdbClient {
    /// Creates a new TMDb client
    pub fn new(api_key: String, api_url: String, language: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            language,
        }
    }

    /// Creates a client from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.tmdb_language.clone(),
        )
    }

    /// Base URL joined with `segments`, with the API key already attached
    fn endpoint(&self, segments: &[&str]) -> ProviderResult<Url> {
        let mut url =
            Url::parse(&self.api_url).map_err(|e| ProviderError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidUrl(format!("{} cannot be a base", self.api_url)))?
            .pop_if_empty()
            .extend(segments);

        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }

    /// URL for a movie listing
    ///
    /// A text query selects /search/movie and drops the genre and cast
    /// filters. Otherwise /discover/movie gets `with_genres` then `with_cast`.
    pub fn movie_list_url(&self, query: &MovieQuery) -> ProviderResult<Url> {
        let page = query.page.max(1).to_string();

        if let Some(text) = present(&query.query) {
            let mut url = self.endpoint(&["search", "movie"])?;
            url.query_pairs_mut()
                .append_pair("query", text)
                .append_pair("page", &page);
            return Ok(url);
        }

        let mut url = self.endpoint(&["discover", "movie"])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &page);
            if let Some(genre) = present(&query.genre) {
                pairs.append_pair("with_genres", genre);
            }
            if let Some(actors) = present(&query.actors) {
                pairs.append_pair("with_cast", actors);
            }
        }
        Ok(url)
    }

    pub fn movie_url(&self, external_id: &str) -> ProviderResult<Url> {
        self.endpoint(&["movie", external_id])
    }

    pub fn genres_url(&self) -> ProviderResult<Url> {
        let mut url = self.endpoint(&["genre", "movie", "list"])?;
        url.query_pairs_mut().append_pair("language", &self.language);
        Ok(url)
    }

    pub fn person_search_url(&self, query: &str) -> ProviderResult<Url> {
        let mut url = self.endpoint(&["search", "person"])?;
        url.query_pairs_mut().append_pair("query", query);
        Ok(url)
    }

    /// Issues a GET and decodes the body
    ///
    /// Non-success statuses are reported before the body is read.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ProviderResult<T> {
        // The query string holds the API key, so only the path is logged.
        let path = url.path().to_string();

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                path = %path,
                status = status.as_u16(),
                provider = "tmdb",
                "Upstream returned non-success status"
            );
            return Err(ProviderError::Status(status));
        }

        let response_text = response.text().await?;
        tracing::debug!(path = %path, bytes = response_text.len(), "Raw TMDb response");

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                path = %path,
                error = %e,
                "Failed to deserialize TMDb response"
            );
            ProviderError::Decode(e)
        })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[async_trait::async_trait]
impl MovieDatabase for TmdbClient {
    async fn list_movies(&self, query: &MovieQuery) -> ProviderResult<TmdbMovieList> {
        let url = self.movie_list_url(query)?;
        let list: TmdbMovieList = self.get_json(url).await?;

        tracing::info!(
            page = query.page,
            results = list.results.len(),
            provider = "tmdb",
            "Movie listing fetched"
        );

        Ok(list)
    }

    async fn movie_by_external_id(&self, external_id: &str) -> ProviderResult<JsonObject> {
        let url = self.movie_url(external_id)?;
        self.get_json(url).await
    }

    async fn genres(&self) -> ProviderResult<JsonObject> {
        let url = self.genres_url()?;
        self.get_json(url).await
    }

    async fn search_people(&self, query: &str) -> ProviderResult<JsonObject> {
        let url = self.person_search_url(query)?;
        self.get_json(url).await
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
