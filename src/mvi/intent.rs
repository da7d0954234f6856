//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (taps, text edits, navigation requests)
/// - Collaborator notifications (preference snapshots, auth status)
/// - Completions of asynchronous work (sign-in results)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
