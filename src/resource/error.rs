use std::fmt;

use super::PendingSignal;

/// Failure of the wrapped operation, forwarded verbatim.
///
/// This is the only error a resource produces. It adds no classification of
/// its own: `Display` and `source` are those of the inner error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationFailed<E>(E);

impl<E> OperationFailed<E> {
    pub fn new(error: E) -> Self {
        Self(error)
    }

    pub fn get_ref(&self) -> &E {
        &self.0
    }

    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<E: fmt::Display> fmt::Display for OperationFailed<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<E: std::error::Error + 'static> std::error::Error for OperationFailed<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

/// Why a read did not produce a value.
///
/// Produced by [`super::ReadOutcome::into_result`]. `Pending` asks the
/// boundary to show a fallback and retry after the signal resolves;
/// `Failed` asks it to show an error state.
#[derive(Debug, Clone)]
pub enum Suspend<E> {
    Pending(PendingSignal),
    Failed(OperationFailed<E>),
}

impl<E> Suspend<E> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Suspend::Pending(_))
    }
}

impl<E: fmt::Display> fmt::Display for Suspend<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suspend::Pending(signal) => {
                write!(f, "Resource {} is not ready", signal.resource_id())
            }
            Suspend::Failed(failure) => failure.fmt(f),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for Suspend<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Suspend::Pending(_) => None,
            Suspend::Failed(failure) => failure.get_ref().source(),
        }
    }
}
