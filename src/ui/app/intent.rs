//! Intents for the pokemon info app.

use tokio::time::Instant;

use crate::pokemon::PokemonResource;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AppIntent {
    /// The user submitted a name.
    Submit { name: String },

    /// The user reset the form or the error boundary.
    Reset,

    /// The runtime obtained the resource for the submitted name.
    ResourceRequested {
        resource: PokemonResource,
        at: Instant,
    },

    /// Time has passed.
    Tick { now: Instant },

    /// The resource the transition waits for has settled.
    Settled { now: Instant },
}

impl Intent for AppIntent {}
