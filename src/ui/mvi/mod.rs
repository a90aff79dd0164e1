//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── runtime ─────────────┘
//! ```
//!
//! - **State**: plain data describing what is on screen
//! - **Intent**: user actions or runtime events (settlement, timer ticks)
//! - **Reducer**: `(State, Intent) -> State`, no I/O
//!
//! Side effects such as asking the cache for a resource live in the
//! runtime, which turns their results into intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
