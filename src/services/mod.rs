pub mod catalog;
pub mod providers;

pub use providers::{MovieDatabase, ProviderError, TmdbClient};
