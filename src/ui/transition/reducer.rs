//! Reducer for transitions.

use crate::ui::mvi::Reducer;

use super::intent::TransitionIntent;
use super::state::{TransitionPhase, TransitionState};

/// Reducer for transition phase changes.
///
/// A transition ends (returns to `Idle`) when the resource settles outside
/// the indicator's minimum display window, when that window closes, or when
/// the timeout passes. Whoever owns the transition commits the new content
/// at that point.
pub struct TransitionReducer;

impl Reducer for TransitionReducer {
    type State = TransitionState;
    type Intent = TransitionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let config = state.config;
        let phase = match (state.phase, intent) {
            // A new target keeps an indicator that is already showing.
            (
                TransitionPhase::Busy { shown_at, .. },
                TransitionIntent::Start { at },
            ) => TransitionPhase::Busy {
                started_at: at,
                shown_at,
            },
            (
                TransitionPhase::Lingering { release_at, .. },
                TransitionIntent::Start { at },
            ) => TransitionPhase::Busy {
                started_at: at,
                shown_at: release_at
                    .checked_sub(config.busy_min_duration)
                    .unwrap_or(release_at),
            },
            (_, TransitionIntent::Start { at }) => TransitionPhase::Pending { started_at: at },

            (_, TransitionIntent::Cancel) => TransitionPhase::Idle,

            (TransitionPhase::Pending { started_at }, TransitionIntent::Tick { now }) => {
                let elapsed = now.saturating_duration_since(started_at);
                if elapsed >= config.timeout {
                    tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "Transition timed out");
                    TransitionPhase::Idle
                } else if elapsed >= config.busy_delay {
                    TransitionPhase::Busy {
                        started_at,
                        shown_at: now,
                    }
                } else {
                    TransitionPhase::Pending { started_at }
                }
            }
            (TransitionPhase::Busy { started_at, shown_at }, TransitionIntent::Tick { now }) => {
                let elapsed = now.saturating_duration_since(started_at);
                if elapsed >= config.timeout {
                    tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "Transition timed out");
                    TransitionPhase::Idle
                } else {
                    TransitionPhase::Busy {
                        started_at,
                        shown_at,
                    }
                }
            }
            (
                TransitionPhase::Lingering {
                    started_at,
                    release_at,
                },
                TransitionIntent::Tick { now },
            ) => {
                if now >= release_at {
                    TransitionPhase::Idle
                } else {
                    TransitionPhase::Lingering {
                        started_at,
                        release_at,
                    }
                }
            }

            (TransitionPhase::Pending { .. }, TransitionIntent::Settled { .. }) => {
                TransitionPhase::Idle
            }
            (TransitionPhase::Busy { started_at, shown_at }, TransitionIntent::Settled { now }) => {
                let release_at = shown_at + config.busy_min_duration;
                if now >= release_at {
                    TransitionPhase::Idle
                } else {
                    TransitionPhase::Lingering {
                        started_at,
                        release_at,
                    }
                }
            }

            (phase, _) => phase,
        };

        TransitionState { config, phase }
    }
}
