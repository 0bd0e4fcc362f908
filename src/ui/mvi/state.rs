//! Base trait for state slices in MVI architecture.

/// Marker trait for state slices.
///
/// States should be:
/// - Replaced, not edited in place from the outside (Clone to derive new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq so tests and the view can detect changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
