//! Intents for transitions.

use tokio::time::Instant;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionIntent {
    /// A new resource was requested and is not ready yet.
    Start { at: Instant },

    /// Time has passed; re-evaluate deadlines.
    Tick { now: Instant },

    /// The awaited resource settled.
    Settled { now: Instant },

    /// Abandon the transition (reset, or the target is already shown).
    Cancel,
}

impl Intent for TransitionIntent {}
