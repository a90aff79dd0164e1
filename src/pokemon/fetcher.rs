use async_trait::async_trait;

use super::error::FetchError;
use super::types::Pokemon;

/// Source of pokemon records.
///
/// The cache factory calls this once per created resource; implementations
/// do not cache or retry on their own.
#[async_trait]
pub trait PokemonFetcher: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Fetch the pokemon called `name`.
    async fn fetch(&self, name: &str) -> Result<Pokemon, FetchError>;
}
