use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Pokemon record as served by the GraphQL pokemon API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: String,
    pub number: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub attacks: Attacks,
    /// Wall-clock time the record was fetched, `HH:MM:SS.mmm` UTC.
    #[serde(default, rename = "fetchedAt")]
    pub fetched_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attacks {
    #[serde(default)]
    pub special: Vec<Attack>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub damage: u32,
}

impl Pokemon {
    /// Copy of this record stamped with the current fetch time.
    pub fn stamped(&self) -> Self {
        Self {
            fetched_at: format_fetched_at(SystemTime::now()),
            ..self.clone()
        }
    }
}

/// Format a timestamp as `HH:MM:SS.mmm` (UTC).
pub fn format_fetched_at(at: SystemTime) -> String {
    let since_epoch = at.duration_since(UNIX_EPOCH).unwrap_or_default();
    let secs_of_day = since_epoch.as_secs() % 86_400;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        secs_of_day / 3600,
        (secs_of_day % 3600) / 60,
        secs_of_day % 60,
        since_epoch.subsec_millis()
    )
}
