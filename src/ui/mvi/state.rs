//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned out to observers, compared to suppress no-op
/// notifications, and shared across tasks.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
