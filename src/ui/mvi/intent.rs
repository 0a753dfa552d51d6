//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (submit, skip, logout)
/// - Results of background work (auth status resolved, write failed)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
