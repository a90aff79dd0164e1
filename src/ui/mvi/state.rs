//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Cheap to clone
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
