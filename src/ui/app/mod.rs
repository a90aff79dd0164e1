//! The pokemon info app: a name form above a suspense boundary.

mod intent;
mod reducer;
mod state;

pub use intent::AppIntent;
pub use reducer::AppReducer;
pub use state::AppState;
