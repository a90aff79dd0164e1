//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, FetcherMode};

/// Look up pokemon through a time-bound resource cache.
///
/// With NAMES, submits each name in order and exits. Without, reads one
/// name per line from stdin: an empty line resets, `:clear` empties the
/// cache, `:quit` exits.
#[derive(Debug, Parser)]
#[command(name = "pokecache", version)]
pub struct Cli {
    /// Config file (default: ~/.config/pokecache/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How long cached resources stay valid.
    #[arg(long, value_name = "MS")]
    pub cache_time_ms: Option<u64>,

    /// Use the built-in roster instead of the network.
    #[arg(long)]
    pub offline: bool,

    /// Artificial latency added to every fetch.
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// GraphQL endpoint to query.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Pokemon names to submit, in order.
    #[arg(value_name = "NAMES")]
    pub names: Vec<String>,
}

impl Cli {
    /// Apply command line overrides on top of the loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ms) = self.cache_time_ms {
            config.cache.cache_time_ms = ms;
        }
        if self.offline {
            config.fetcher.mode = FetcherMode::Offline;
        }
        if let Some(ms) = self.delay_ms {
            config.fetcher.delay_ms = ms;
        }
        if let Some(endpoint) = &self.endpoint {
            config.fetcher.endpoint = endpoint.clone();
        }
    }
}

/// A line read in interactive mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    ClearCache,
    Submit(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":quit" | ":q" => Command::Quit,
            ":clear" => Command::ClearCache,
            name => Command::Submit(name.to_string()),
        }
    }
}
