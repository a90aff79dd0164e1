//! Pokemon data and the fetchers that produce it.
//!
//! The cache provider at the bottom wires a fetcher into a
//! [`ResourceCache`]: each created resource runs one fetch.

mod error;
mod fetcher;
mod graphql;
mod offline;
mod types;

pub use error::FetchError;
pub use fetcher::PokemonFetcher;
pub use graphql::GraphqlFetcher;
pub use offline::OfflineFetcher;
pub use types::{format_fetched_at, Attack, Attacks, Pokemon};

use std::sync::Arc;
use std::time::Duration;

use crate::config::{FetcherConfig, FetcherMode};
use crate::resource::{CacheHandle, Resource, ResourceCache};

pub type PokemonResource = Resource<Pokemon, FetchError>;
pub type PokemonCache = ResourceCache<Pokemon, FetchError>;

/// Build the fetcher selected by `config`.
pub fn fetcher_from_config(config: &FetcherConfig) -> Result<Arc<dyn PokemonFetcher>, FetchError> {
    let fetcher: Arc<dyn PokemonFetcher> = match config.mode {
        FetcherMode::Graphql => Arc::new(GraphqlFetcher::from_config(config)?),
        FetcherMode::Offline => Arc::new(OfflineFetcher::new(Duration::from_millis(config.delay_ms))),
    };
    tracing::info!(fetcher = fetcher.name(), "Pokemon fetcher ready");
    Ok(fetcher)
}

/// Create a pokemon cache whose entries live for `cache_time`.
///
/// Must be used from within a tokio runtime: every miss spawns a fetch.
pub fn pokemon_cache(
    fetcher: Arc<dyn PokemonFetcher>,
    cache_time: Duration,
) -> CacheHandle<Pokemon, FetchError> {
    ResourceCache::shared(cache_time, move |name: &str| {
        let fetcher = Arc::clone(&fetcher);
        let name = name.to_string();
        Resource::spawn(async move {
            let result = fetcher.fetch(&name).await;
            if let Err(err) = &result {
                tracing::info!(pokemon = %name, kind = err.kind(), error = %err, "Pokemon fetch failed");
            }
            result
        })
    })
}
