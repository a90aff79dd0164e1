//! State for the pokemon info app.

use crate::pokemon::PokemonResource;
use crate::ui::mvi::UiState;
use crate::ui::transition::{SuspenseConfig, TransitionState};

/// Everything the pokemon info screen shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Name as typed by the user.
    pub pokemon_name: String,
    /// Resource currently rendered inside the suspense boundary.
    pub resource: Option<PokemonResource>,
    /// Resource the running transition is waiting for.
    pub pending: Option<PokemonResource>,
    pub transition: TransitionState,
}

impl UiState for AppState {}

impl AppState {
    pub fn new(config: SuspenseConfig) -> Self {
        Self {
            transition: TransitionState::new(config),
            ..Self::default()
        }
    }

    /// Show the pending indicator over the current content.
    pub fn is_pending(&self) -> bool {
        self.transition.is_pending()
    }

    /// Nothing has been submitted, or the app was reset.
    pub fn is_empty(&self) -> bool {
        self.resource.is_none() && self.pending.is_none()
    }
}
