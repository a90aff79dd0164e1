//! In-process fetcher with a built-in roster.
//!
//! Used when no network is wanted (`--offline`) and by tests. Every fetch
//! waits for the configured delay first, like a slow network would.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::error::FetchError;
use super::fetcher::PokemonFetcher;
use super::types::{Attack, Attacks, Pokemon};

pub struct OfflineFetcher {
    roster: HashMap<String, Pokemon>,
    delay: Duration,
    failures: Mutex<HashMap<String, String>>,
    calls: AtomicUsize,
}

impl OfflineFetcher {
    /// Fetcher over the built-in roster.
    pub fn new(delay: Duration) -> Self {
        Self::with_roster(default_roster(), delay)
    }

    /// Fetcher over a custom roster, keyed by lowercase name.
    pub fn with_roster(roster: impl IntoIterator<Item = Pokemon>, delay: Duration) -> Self {
        let roster = roster
            .into_iter()
            .map(|p| (p.name.to_lowercase(), p))
            .collect();
        Self {
            roster,
            delay,
            failures: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Make every later fetch of `name` fail with `message`.
    pub fn fail_with(&self, name: &str, message: impl Into<String>) {
        self.failures
            .lock()
            .insert(name.to_lowercase(), message.into());
    }

    /// Undo [`OfflineFetcher::fail_with`] for `name`.
    pub fn recover(&self, name: &str) {
        self.failures.lock().remove(&name.to_lowercase());
    }

    /// Number of fetches started so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.roster.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl PokemonFetcher for OfflineFetcher {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn fetch(&self, name: &str) -> Result<Pokemon, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = name.to_lowercase();

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let injected = self.failures.lock().get(&key).cloned();
        if let Some(message) = injected {
            return Err(FetchError::Injected(message));
        }

        self.roster
            .get(&key)
            .map(Pokemon::stamped)
            .ok_or_else(|| FetchError::NotFound {
                name: name.to_string(),
            })
    }
}

fn attack(name: &str, kind: &str, damage: u32) -> Attack {
    Attack {
        name: name.to_string(),
        kind: kind.to_string(),
        damage,
    }
}

fn pokemon(number: &str, name: &str, special: Vec<Attack>) -> Pokemon {
    Pokemon {
        id: format!("offline-{}", number),
        number: number.to_string(),
        name: name.to_string(),
        image: format!("https://img.pokemondb.net/artwork/{}.jpg", name.to_lowercase()),
        attacks: Attacks { special },
        fetched_at: String::new(),
    }
}

fn default_roster() -> Vec<Pokemon> {
    vec![
        pokemon(
            "001",
            "Bulbasaur",
            vec![
                attack("Power Whip", "Grass", 70),
                attack("Seed Bomb", "Grass", 40),
                attack("Sludge Bomb", "Poison", 55),
            ],
        ),
        pokemon(
            "006",
            "Charizard",
            vec![
                attack("Dragon Claw", "Dragon", 35),
                attack("Fire Blast", "Fire", 100),
                attack("Flamethrower", "Fire", 55),
            ],
        ),
        pokemon(
            "025",
            "Pikachu",
            vec![
                attack("Discharge", "Electric", 35),
                attack("Thunder", "Electric", 100),
                attack("Thunderbolt", "Electric", 55),
            ],
        ),
        pokemon(
            "132",
            "Ditto",
            vec![attack("Struggle", "Normal", 15)],
        ),
        pokemon(
            "133",
            "Eevee",
            vec![
                attack("Body Slam", "Normal", 40),
                attack("Dig", "Ground", 70),
                attack("Swift", "Normal", 30),
            ],
        ),
        pokemon(
            "150",
            "Mewtwo",
            vec![
                attack("Hyper Beam", "Normal", 120),
                attack("Psychic", "Psychic", 55),
                attack("Shadow Ball", "Ghost", 45),
            ],
        ),
        pokemon(
            "151",
            "Mew",
            vec![
                attack("Dragon Pulse", "Dragon", 65),
                attack("Earthquake", "Ground", 100),
                attack("Fire Blast", "Fire", 100),
                attack("Hurricane", "Flying", 80),
            ],
        ),
    ]
}
