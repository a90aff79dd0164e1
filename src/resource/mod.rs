//! Suspense-style resources.
//!
//! A [`Resource`] wraps one asynchronous operation that is started the moment
//! the resource is created. Readers never block: [`Resource::read`] reports
//! the value, the forwarded failure, or a [`PendingSignal`] that the caller
//! can await before trying again.
//!
//! # Lifecycle
//!
//! ```text
//! spawn ──→ Pending ──┬──→ Success(value)
//!                     └──→ Error(error)
//! ```
//!
//! The status changes exactly once. The spawned task is the only writer of
//! the outcome; every handle observes it through a `watch` channel.

mod cache;
mod error;

pub use cache::{CacheEntry, CacheHandle, ResourceCache, ResourceFactory};
pub use error::{OperationFailed, Suspend};

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use uuid::Uuid;

/// Observable status of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    Pending,
    Success,
    Error,
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceStatus::Pending => write!(f, "pending"),
            ResourceStatus::Success => write!(f, "success"),
            ResourceStatus::Error => write!(f, "error"),
        }
    }
}

/// Outcome slot shared between the operation task and the handles.
#[derive(Debug, Clone)]
enum Outcome<T, E> {
    Pending,
    Success(T),
    Error(E),
}

impl<T, E> Outcome<T, E> {
    fn status(&self) -> ResourceStatus {
        match self {
            Outcome::Pending => ResourceStatus::Pending,
            Outcome::Success(_) => ResourceStatus::Success,
            Outcome::Error(_) => ResourceStatus::Error,
        }
    }

    fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending)
    }
}

/// Result of a synchronous [`Resource::read`].
#[derive(Debug, Clone)]
pub enum ReadOutcome<T, E> {
    /// The operation succeeded.
    Ready(T),
    /// The operation has not settled yet. Suspend and retry once the signal
    /// resolves.
    Pending(PendingSignal),
    /// The operation failed. Not recoverable through this resource.
    Failed(OperationFailed<E>),
}

impl<T, E> ReadOutcome<T, E> {
    pub fn is_ready(&self) -> bool {
        matches!(self, ReadOutcome::Ready(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ReadOutcome::Pending(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ReadOutcome::Failed(_))
    }

    /// Get the value, if ready.
    pub fn ready(self) -> Option<T> {
        match self {
            ReadOutcome::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Get the forwarded error, if failed.
    pub fn failed(self) -> Option<E> {
        match self {
            ReadOutcome::Failed(failure) => Some(failure.into_inner()),
            _ => None,
        }
    }

    /// Convert into a `Result` so a reader can propagate suspension and
    /// failure to its boundary with `?`.
    pub fn into_result(self) -> Result<T, Suspend<E>> {
        match self {
            ReadOutcome::Ready(value) => Ok(value),
            ReadOutcome::Pending(signal) => Err(Suspend::Pending(signal)),
            ReadOutcome::Failed(failure) => Err(Suspend::Failed(failure)),
        }
    }
}

/// Awaitable handle for a resource that has not settled yet.
///
/// Carries no value. The owner of the render loop awaits
/// [`PendingSignal::settled`] and then reads the resource again.
#[derive(Clone)]
pub struct PendingSignal {
    resource_id: Uuid,
    changes: watch::Receiver<ResourceStatus>,
}

impl PendingSignal {
    /// Id of the resource this signal belongs to.
    pub fn resource_id(&self) -> Uuid {
        self.resource_id
    }

    /// Wait until the resource settles.
    ///
    /// Also returns if the operation task went away without settling
    /// (panicked, or the runtime shut down). The resource then stays
    /// pending for good.
    pub async fn settled(mut self) {
        let _ = self
            .changes
            .wait_for(|status| *status != ResourceStatus::Pending)
            .await;
    }
}

impl fmt::Debug for PendingSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSignal")
            .field("resource_id", &self.resource_id)
            .finish()
    }
}

/// Synchronous-read handle over one asynchronous operation.
///
/// Cloning is cheap and every clone observes the same outcome. Equality is
/// reference equality: two handles are equal only if they came from the same
/// [`Resource::spawn`] call.
pub struct Resource<T, E> {
    inner: Arc<ResourceInner<T, E>>,
}

struct ResourceInner<T, E> {
    id: Uuid,
    outcome: watch::Receiver<Outcome<T, E>>,
    status: watch::Receiver<ResourceStatus>,
}

impl<T, E> Resource<T, E>
where
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Start `operation` on the current tokio runtime and return a handle
    /// to its eventual outcome.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn spawn<F>(operation: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let id = Uuid::new_v4();
        let (outcome_tx, outcome_rx) = watch::channel(Outcome::Pending);
        let (status_tx, status_rx) = watch::channel(ResourceStatus::Pending);

        tokio::spawn(async move {
            let outcome = match operation.await {
                Ok(value) => Outcome::Success(value),
                Err(error) => Outcome::Error(error),
            };
            let status = outcome.status();
            tracing::debug!(resource_id = %id, status = %status, "Resource settled");
            // Orphaned resources have no receivers left; the result is dropped.
            outcome_tx.send_replace(outcome);
            status_tx.send_replace(status);
        });

        tracing::debug!(resource_id = %id, "Resource operation started");

        Self::from_channels(id, outcome_rx, status_rx)
    }
}

impl<T, E> Resource<T, E> {
    /// A resource that has already succeeded with `value`.
    pub fn ready(value: T) -> Self {
        Self::settled_with(Outcome::Success(value))
    }

    /// A resource that has already failed with `error`.
    pub fn failed(error: E) -> Self {
        Self::settled_with(Outcome::Error(error))
    }

    fn settled_with(outcome: Outcome<T, E>) -> Self {
        let status = outcome.status();
        let (_, outcome_rx) = watch::channel(outcome);
        let (_, status_rx) = watch::channel(status);
        Self::from_channels(Uuid::new_v4(), outcome_rx, status_rx)
    }

    fn from_channels(
        id: Uuid,
        outcome: watch::Receiver<Outcome<T, E>>,
        status: watch::Receiver<ResourceStatus>,
    ) -> Self {
        Self {
            inner: Arc::new(ResourceInner {
                id,
                outcome,
                status,
            }),
        }
    }

    /// Unique id of this resource, used in log fields.
    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    pub fn status(&self) -> ResourceStatus {
        self.inner.outcome.borrow().status()
    }

    pub fn is_settled(&self) -> bool {
        !self.inner.outcome.borrow().is_pending()
    }

    /// Signal to await while the resource is pending.
    ///
    /// `None` once settled, and also when the operation task is gone without
    /// ever settling, since there is nothing left to wait for.
    pub fn pending_signal(&self) -> Option<PendingSignal> {
        if self.is_settled() || self.inner.status.has_changed().is_err() {
            return None;
        }
        Some(self.signal())
    }

    fn signal(&self) -> PendingSignal {
        PendingSignal {
            resource_id: self.inner.id,
            changes: self.inner.status.clone(),
        }
    }

    /// Reference equality.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl<T: Clone, E: Clone> Resource<T, E> {
    /// Read the outcome without blocking.
    ///
    /// Once settled, every call returns the same value or the same error.
    pub fn read(&self) -> ReadOutcome<T, E> {
        match &*self.inner.outcome.borrow() {
            Outcome::Pending => ReadOutcome::Pending(self.signal()),
            Outcome::Success(value) => ReadOutcome::Ready(value.clone()),
            Outcome::Error(error) => ReadOutcome::Failed(OperationFailed::new(error.clone())),
        }
    }
}

impl<T, E> Clone for Resource<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, E> PartialEq for Resource<T, E> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<T, E> Eq for Resource<T, E> {}

impl<T, E> fmt::Debug for Resource<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("id", &self.inner.id)
            .field("status", &self.status())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn read_is_pending_until_operation_completes() {
        let (tx, rx) = oneshot::channel::<Result<u32, String>>();
        let resource = Resource::spawn(async move { rx.await.unwrap() });

        assert!(resource.read().is_pending());
        assert_eq!(resource.status(), ResourceStatus::Pending);

        let signal = resource.pending_signal().expect("pending resource has a signal");
        tx.send(Ok(7)).unwrap();
        signal.settled().await;

        assert_eq!(resource.read().ready(), Some(7));
        assert!(resource.pending_signal().is_none());
    }

    #[tokio::test]
    async fn failure_is_forwarded_verbatim_on_every_read() {
        let resource: Resource<u32, String> =
            Resource::spawn(async { Err("network error".to_string()) });
        if let ReadOutcome::Pending(signal) = resource.read() {
            signal.settled().await;
        }

        for _ in 0..3 {
            assert_eq!(resource.read().failed().as_deref(), Some("network error"));
        }
        assert_eq!(resource.status(), ResourceStatus::Error);
    }

    #[tokio::test]
    async fn operation_starts_without_a_reader() {
        let (tx, rx) = oneshot::channel();
        let _resource: Resource<(), ()> = Resource::spawn(async move {
            let _ = tx.send(());
            Ok(())
        });

        tokio::time::timeout(Duration::from_secs(1), rx)
            .await
            .expect("operation should run eagerly")
            .unwrap();
    }

    #[tokio::test]
    async fn clones_share_identity_and_outcome() {
        let a: Resource<&str, ()> = Resource::spawn(async { Ok("bulbasaur") });
        let b = a.clone();
        let c: Resource<&str, ()> = Resource::spawn(async { Ok("bulbasaur") });

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.id(), b.id());

        if let Some(signal) = a.pending_signal() {
            signal.settled().await;
        }
        assert_eq!(b.read().ready(), Some("bulbasaur"));
    }

    #[test]
    fn prebuilt_resources_are_settled() {
        let ok: Resource<u8, String> = Resource::ready(1);
        let err: Resource<u8, String> = Resource::failed("boom".into());

        assert!(ok.is_settled());
        assert_eq!(ok.status(), ResourceStatus::Success);
        assert!(ok.pending_signal().is_none());
        assert_eq!(err.status(), ResourceStatus::Error);
        assert_eq!(err.read().failed().as_deref(), Some("boom"));
    }

    #[tokio::test]
    async fn panicked_operation_leaves_resource_pending_without_signal() {
        let resource: Resource<u8, ()> = Resource::spawn(async { panic!("operation panicked") });
        let signal = resource.pending_signal().expect("still pending right after spawn");
        signal.settled().await;

        assert!(resource.read().is_pending());
        assert!(resource.pending_signal().is_none());
    }

    #[tokio::test]
    async fn into_result_maps_each_state() {
        let ready: Resource<u8, String> = Resource::ready(3);
        assert_eq!(ready.read().into_result().ok(), Some(3));

        let failed: Resource<u8, String> = Resource::failed("nope".into());
        match failed.read().into_result() {
            Err(Suspend::Failed(failure)) => assert_eq!(failure.into_inner(), "nope"),
            other => panic!("expected failure, got {:?}", other),
        }

        let (_tx, rx) = oneshot::channel::<Result<u8, String>>();
        let pending = Resource::spawn(async move { rx.await.unwrap_or(Ok(0)) });
        assert!(matches!(
            pending.read().into_result(),
            Err(Suspend::Pending(_))
        ));
    }
}
