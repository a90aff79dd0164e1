//! Configuration: TOML file, defaults and validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CacheConfig, Config, FetcherConfig, FetcherMode, SuspenseSettings};
