//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_graphql;

use pokecache::pokemon::{pokemon_cache, Attack, Attacks, FetchError, OfflineFetcher, Pokemon};
use pokecache::resource::CacheHandle;
use pokecache::ui::runtime::{AppRuntime, RecordingSink};
use pokecache::ui::transition::SuspenseConfig;
use std::sync::Arc;
use std::time::Duration;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// A pokemon record as the API would return it.
pub fn pokemon(name: &str, number: &str) -> Pokemon {
    Pokemon {
        id: format!("test-{}", number),
        number: number.to_string(),
        name: name.to_string(),
        image: format!("https://img.pokemondb.net/artwork/{}.jpg", name.to_lowercase()),
        attacks: Attacks {
            special: vec![Attack {
                name: "Tackle".to_string(),
                kind: "Normal".to_string(),
                damage: 10,
            }],
        },
        fetched_at: String::new(),
    }
}

/// Offline fetcher plus a cache over it.
pub fn offline_cache(
    delay: Duration,
    cache_time: Duration,
) -> (Arc<OfflineFetcher>, CacheHandle<Pokemon, FetchError>) {
    let fetcher = Arc::new(OfflineFetcher::new(delay));
    let cache = pokemon_cache(fetcher.clone(), cache_time);
    (fetcher, cache)
}

/// Runtime over an offline fetcher, recording frames, default suspense timing.
pub fn offline_runtime(
    delay: Duration,
    cache_time: Duration,
) -> (Arc<OfflineFetcher>, AppRuntime<RecordingSink>) {
    let (fetcher, cache) = offline_cache(delay, cache_time);
    let runtime = AppRuntime::new(cache, SuspenseConfig::default(), RecordingSink::new());
    (fetcher, runtime)
}
