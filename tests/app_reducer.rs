mod common;

use common::{ms, pokemon};
use pokecache::pokemon::{FetchError, Pokemon, PokemonResource};
use pokecache::resource::Resource;
use pokecache::ui::app::{AppIntent, AppReducer, AppState};
use pokecache::ui::mvi::Reducer;
use pokecache::ui::transition::{SuspenseConfig, TransitionPhase};
use tokio::sync::oneshot;
use tokio::time::Instant;

/// A resource that stays pending while the returned sender is alive.
fn pending_resource() -> (oneshot::Sender<Result<Pokemon, FetchError>>, PokemonResource) {
    let (tx, rx) = oneshot::channel();
    let resource = Resource::spawn(async move {
        rx.await
            .unwrap_or_else(|_| Err(FetchError::Injected("dropped".into())))
    });
    (tx, resource)
}

fn showing(resource: PokemonResource) -> AppState {
    AppState {
        pokemon_name: "pikachu".into(),
        resource: Some(resource),
        ..AppState::new(SuspenseConfig::default())
    }
}

#[test]
fn submit_only_changes_name() {
    let state = AppReducer::reduce(
        AppState::default(),
        AppIntent::Submit {
            name: "eevee".into(),
        },
    );
    assert_eq!(state.pokemon_name, "eevee");
    assert!(state.is_empty());
}

#[tokio::test]
async fn first_resource_is_committed_immediately() {
    let (_tx, resource) = pending_resource();
    let state = AppReducer::reduce(
        AppState::default(),
        AppIntent::ResourceRequested {
            resource: resource.clone(),
            at: Instant::now(),
        },
    );
    assert_eq!(state.resource, Some(resource));
    assert!(state.pending.is_none());
    assert!(!state.transition.is_active());
}

#[tokio::test]
async fn pending_resource_starts_transition() {
    let t0 = Instant::now();
    let (_tx, next) = pending_resource();
    let current = Resource::ready(pokemon("Pikachu", "025"));

    let state = AppReducer::reduce(
        showing(current.clone()),
        AppIntent::ResourceRequested {
            resource: next.clone(),
            at: t0,
        },
    );
    assert_eq!(state.resource, Some(current));
    assert_eq!(state.pending, Some(next));
    assert_eq!(state.transition.phase, TransitionPhase::Pending { started_at: t0 });
}

#[test]
fn settled_resource_skips_transition() {
    let current = Resource::ready(pokemon("Pikachu", "025"));
    let next = Resource::ready(pokemon("Ditto", "132"));

    let state = AppReducer::reduce(
        showing(current),
        AppIntent::ResourceRequested {
            resource: next.clone(),
            at: Instant::now(),
        },
    );
    assert_eq!(state.resource, Some(next));
    assert!(!state.transition.is_active());
}

#[tokio::test]
async fn returning_to_shown_resource_cancels_transition() {
    let t0 = Instant::now();
    let current = Resource::ready(pokemon("Pikachu", "025"));
    let (_tx, next) = pending_resource();

    let state = AppReducer::reduce(
        showing(current.clone()),
        AppIntent::ResourceRequested {
            resource: next,
            at: t0,
        },
    );
    let state = AppReducer::reduce(
        state,
        AppIntent::ResourceRequested {
            resource: current.clone(),
            at: t0 + ms(50),
        },
    );
    assert_eq!(state.resource, Some(current));
    assert!(state.pending.is_none());
    assert_eq!(state.transition.phase, TransitionPhase::Idle);
}

#[tokio::test]
async fn settle_commits_pending_resource() {
    let t0 = Instant::now();
    let (_tx, next) = pending_resource();
    let state = AppReducer::reduce(
        showing(Resource::ready(pokemon("Pikachu", "025"))),
        AppIntent::ResourceRequested {
            resource: next.clone(),
            at: t0,
        },
    );

    let state = AppReducer::reduce(state, AppIntent::Settled { now: t0 + ms(100) });
    assert_eq!(state.resource, Some(next));
    assert!(state.pending.is_none());
}

#[tokio::test]
async fn lingering_defers_commit_until_release() {
    let t0 = Instant::now();
    let current = Resource::ready(pokemon("Pikachu", "025"));
    let (_tx, next) = pending_resource();
    let state = AppReducer::reduce(
        showing(current.clone()),
        AppIntent::ResourceRequested {
            resource: next.clone(),
            at: t0,
        },
    );
    let state = AppReducer::reduce(state, AppIntent::Tick { now: t0 + ms(300) });
    assert!(state.is_pending());

    let state = AppReducer::reduce(state, AppIntent::Settled { now: t0 + ms(400) });
    assert!(state.is_pending());
    assert_eq!(state.resource, Some(current));

    let state = AppReducer::reduce(state, AppIntent::Tick { now: t0 + ms(1000) });
    assert!(!state.is_pending());
    assert_eq!(state.resource, Some(next));
}

#[tokio::test]
async fn timeout_commits_pending_resource_unsettled() {
    let t0 = Instant::now();
    let (_tx, next) = pending_resource();
    let state = AppReducer::reduce(
        showing(Resource::ready(pokemon("Pikachu", "025"))),
        AppIntent::ResourceRequested {
            resource: next.clone(),
            at: t0,
        },
    );
    let state = AppReducer::reduce(state, AppIntent::Tick { now: t0 + ms(4000) });

    assert_eq!(state.resource, Some(next.clone()));
    assert!(!next.is_settled());
    assert!(!state.transition.is_active());
}

#[tokio::test]
async fn reset_clears_everything_but_keeps_timing() {
    let config = SuspenseConfig {
        timeout: ms(1000),
        busy_delay: ms(100),
        busy_min_duration: ms(200),
    };
    let (_tx, next) = pending_resource();
    let state = AppState {
        pokemon_name: "mew".into(),
        resource: Some(Resource::ready(pokemon("Mew", "151"))),
        pending: Some(next),
        ..AppState::new(config)
    };

    let state = AppReducer::reduce(state, AppIntent::Reset);
    assert!(state.is_empty());
    assert!(state.pokemon_name.is_empty());
    assert_eq!(state.transition.config, config);
}
