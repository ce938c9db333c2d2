pub mod movie;

pub use movie::{Movie, MoviePage, TmdbMovieList};

/// Opaque JSON object relayed from upstream without a local schema
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Parameters for listing movies, already normalized
///
/// Empty strings never appear here: they are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery {
    pub page: u32,
    pub query: Option<String>,
    pub genre: Option<String>,
    pub actors: Option<String>,
}

impl Default for MovieQuery {
    fn default() -> Self {
        Self {
            page: 1,
            query: None,
            genre: None,
            actors: None,
        }
    }
}

impl MovieQuery {
    /// Builds a query from raw request values
    ///
    /// A page that is missing, unparseable or below 1 becomes 1.
    pub fn from_raw(
        page: Option<&str>,
        query: Option<String>,
        genre: Option<String>,
        actors: Option<String>,
    ) -> Self {
        Self {
            page: parse_page(page),
            query: non_empty(query),
            genre: non_empty(genre),
            actors: non_empty(actors),
        }
    }
}

/// Parses a page number, falling back to 1
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
