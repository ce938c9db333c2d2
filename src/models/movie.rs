use serde::{Deserialize, Deserializer, Serialize};

/// A movie as returned to the client
///
/// Decoded straight from TMDb list results. Every field falls back to its
/// default when missing; the shape is not validated locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Movie {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    /// Average vote, accepted either as a JSON number or a numeric string
    #[serde(
        rename = "vote_average",
        default,
        deserialize_with = "deserialize_rating"
    )]
    pub rating: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRating {
    Number(f64),
    Text(String),
}

fn deserialize_rating<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawRating>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(RawRating::Number(n)) => Ok(n),
        Some(RawRating::Text(s)) if s.trim().is_empty() => Ok(0.0),
        Some(RawRating::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid vote_average: {:?}", s))),
    }
}

// ============================================================================
// TMDb API Types
// ============================================================================

/// Raw page of movies from the TMDb discover and search endpoints
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TmdbMovieList {
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub total_results: u64,
}

/// Page of movies returned to the client
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoviePage {
    pub movies: Vec<Movie>,
    pub total_pages: u64,
    pub total_items: u64,
}

impl From<TmdbMovieList> for MoviePage {
    fn from(list: TmdbMovieList) -> Self {
        MoviePage {
            movies: list.results,
            total_pages: list.total_pages,
            total_items: list.total_results,
        }
    }
}
