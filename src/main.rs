use std::io;

use anyhow::{bail, Context};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use pokecache::cli::{Cli, Command};
use pokecache::config::Config;
use pokecache::logging::init_tracing;
use pokecache::pokemon::{fetcher_from_config, pokemon_cache};
use pokecache::ui::runtime::{AppRuntime, WriterSink};
use pokecache::ui::transition::SuspenseConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("Config file '{}' does not exist", path.display());
            }
            Config::load_from(path)?
        }
        None => Config::load()?,
    };
    cli.apply_to(&mut config);
    config.validate()?;

    let fetcher = fetcher_from_config(&config.fetcher).context("Failed to set up pokemon fetcher")?;
    let cache = pokemon_cache(fetcher, config.cache.cache_time());
    let suspense = SuspenseConfig::from(&config.suspense);
    let mut runtime = AppRuntime::new(cache, suspense, WriterSink::new(io::stdout()));

    if !cli.names.is_empty() {
        for name in &cli.names {
            runtime.submit(name).await?;
        }
        return Ok(());
    }

    runtime.reset()?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::ClearCache => {
                let count = runtime.cache().len();
                runtime.cache().clear();
                println!("Cleared {} cached resource(s)\n", count);
            }
            Command::Submit(name) => runtime.submit(&name).await?,
        }
    }

    Ok(())
}
