//! State for transitions between resources.

use std::time::Duration;

use tokio::time::Instant;

use crate::config::SuspenseSettings;
use crate::ui::mvi::UiState;

/// Timing of the pending indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuspenseConfig {
    /// After this long the old content is dropped and the fallback shown.
    pub timeout: Duration,
    /// The indicator appears only after this long.
    pub busy_delay: Duration,
    /// Once shown, the indicator stays at least this long.
    pub busy_min_duration: Duration,
}

impl Default for SuspenseConfig {
    fn default() -> Self {
        Self::from(&SuspenseSettings::default())
    }
}

impl From<&SuspenseSettings> for SuspenseConfig {
    fn from(settings: &SuspenseSettings) -> Self {
        Self {
            timeout: Duration::from_millis(settings.timeout_ms),
            busy_delay: Duration::from_millis(settings.busy_delay_ms),
            busy_min_duration: Duration::from_millis(settings.busy_min_duration_ms),
        }
    }
}

/// Where a transition currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    /// No transition in progress.
    #[default]
    Idle,

    /// Waiting for the new resource; old content stays, no indicator yet.
    Pending { started_at: Instant },

    /// Still waiting; the indicator is visible.
    Busy {
        started_at: Instant,
        shown_at: Instant,
    },

    /// The resource settled, but the indicator is held until `release_at`.
    Lingering {
        started_at: Instant,
        release_at: Instant,
    },
}

/// Transition state with the timing it runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionState {
    pub config: SuspenseConfig,
    pub phase: TransitionPhase,
}

impl UiState for TransitionState {}

impl TransitionState {
    pub fn new(config: SuspenseConfig) -> Self {
        Self {
            config,
            phase: TransitionPhase::Idle,
        }
    }

    /// A transition has started and not yet finished.
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, TransitionPhase::Idle)
    }

    /// The pending indicator should be visible.
    pub fn is_pending(&self) -> bool {
        matches!(
            self.phase,
            TransitionPhase::Busy { .. } | TransitionPhase::Lingering { .. }
        )
    }

    /// When the phase next changes on its own, if ever.
    pub fn next_deadline(&self) -> Option<Instant> {
        let config = &self.config;
        match self.phase {
            TransitionPhase::Idle => None,
            TransitionPhase::Pending { started_at } => {
                Some(started_at + config.busy_delay.min(config.timeout))
            }
            TransitionPhase::Busy { started_at, .. } => Some(started_at + config.timeout),
            TransitionPhase::Lingering { release_at, .. } => Some(release_at),
        }
    }
}
