//! Fetcher backed by the public GraphQL pokemon API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::FetcherConfig;

use super::error::FetchError;
use super::fetcher::PokemonFetcher;
use super::types::Pokemon;

const POKEMON_QUERY: &str = r#"
query PokemonInfo($name: String) {
  pokemon(name: $name) {
    id
    number
    name
    image
    attacks {
      special {
        name
        type
        damage
      }
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<GraphqlData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlData {
    pokemon: Option<Pokemon>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

pub struct GraphqlFetcher {
    client: Client,
    endpoint: String,
    delay: Duration,
}

impl GraphqlFetcher {
    /// Build a fetcher with its own HTTP client configured from `config`.
    pub fn from_config(config: &FetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|e| FetchError::Network {
                endpoint: config.endpoint.clone(),
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self::with_client(
            client,
            config.endpoint.clone(),
            Duration::from_millis(config.delay_ms),
        ))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>, delay: Duration) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            delay,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn network_error(&self, err: reqwest::Error) -> FetchError {
        FetchError::Network {
            endpoint: self.endpoint.clone(),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl PokemonFetcher for GraphqlFetcher {
    fn name(&self) -> &'static str {
        "graphql"
    }

    async fn fetch(&self, name: &str) -> Result<Pokemon, FetchError> {
        // Artificial latency so pending states are visible.
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let body = json!({
            "query": POKEMON_QUERY,
            "variables": { "name": name.to_lowercase() },
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.network_error(e))?;
        let payload = serde_json::from_str::<GraphqlResponse>(&text);

        if !status.is_success() {
            let message = payload
                .ok()
                .map(|p| p.errors)
                .filter(|errors| !errors.is_empty())
                .map(|errors| {
                    errors
                        .into_iter()
                        .map(|e| e.message)
                        .collect::<Vec<_>>()
                        .join("\n")
                })
                .unwrap_or_else(|| "unknown".to_string());
            tracing::warn!(status = status.as_u16(), pokemon = %name, "Pokemon API returned an error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let payload = payload.map_err(|e| FetchError::InvalidResponse(e.to_string()))?;
        let pokemon = payload
            .data
            .and_then(|data| data.pokemon)
            .ok_or_else(|| FetchError::NotFound {
                name: name.to_string(),
            })?;

        Ok(pokemon.stamped())
    }
}
