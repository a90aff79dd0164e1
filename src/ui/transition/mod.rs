//! Transition state machine.
//!
//! Models a pending UI: while a newly requested resource loads, the old
//! content stays on screen, an indicator appears after a short delay and,
//! once shown, stays long enough not to flicker. If loading takes longer
//! than the timeout the transition gives up and the fallback is shown.

mod intent;
mod reducer;
mod state;

pub use intent::TransitionIntent;
pub use reducer::TransitionReducer;
pub use state::{SuspenseConfig, TransitionPhase, TransitionState};
