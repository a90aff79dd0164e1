//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (submitting a name, resetting)
/// - Runtime events (a resource settled, a deadline passed)
pub trait Intent: Send + 'static {}
