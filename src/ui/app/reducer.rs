//! Reducer for the pokemon info app.

use crate::pokemon::PokemonResource;
use crate::ui::mvi::Reducer;
use crate::ui::transition::{TransitionIntent, TransitionReducer};

use super::intent::AppIntent;
use super::state::AppState;

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppIntent::Submit { name } => AppState {
                pokemon_name: name,
                ..state
            },

            AppIntent::Reset => AppState::new(state.transition.config),

            AppIntent::ResourceRequested { resource, at } => {
                if state.resource.as_ref() == Some(&resource) {
                    // Back to what is already on screen.
                    return commit(state, None);
                }

                if state.resource.is_none() || resource.is_settled() {
                    return commit(state, Some(resource));
                }

                let transition =
                    TransitionReducer::reduce(state.transition, TransitionIntent::Start { at });
                AppState {
                    pending: Some(resource),
                    transition,
                    ..state
                }
            }

            AppIntent::Tick { now } => advance(state, TransitionIntent::Tick { now }),

            AppIntent::Settled { now } => advance(state, TransitionIntent::Settled { now }),
        }
    }
}

/// Show `resource` (or keep the current one) and end any transition.
fn commit(state: AppState, resource: Option<PokemonResource>) -> AppState {
    let transition = TransitionReducer::reduce(state.transition, TransitionIntent::Cancel);
    AppState {
        resource: resource.or(state.resource),
        pending: None,
        transition,
        ..state
    }
}

/// Feed the transition; when it finishes, the pending resource is committed.
fn advance(state: AppState, intent: TransitionIntent) -> AppState {
    let was_active = state.transition.is_active();
    let transition = TransitionReducer::reduce(state.transition, intent);

    if was_active && !transition.is_active() {
        let resource = state.pending.or(state.resource);
        return AppState {
            pokemon_name: state.pokemon_name,
            resource,
            pending: None,
            transition,
        };
    }

    AppState { transition, ..state }
}
