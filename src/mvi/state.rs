//! Base trait for presentation state in MVI architecture.

/// Marker trait for state snapshots.
///
/// Snapshots are:
/// - Immutable (Clone to create the next state)
/// - Self-contained (everything a renderer needs)
/// - Comparable (PartialEq for change detection)
///
/// Consumers only ever receive copies; no state record is shared by
/// reference across the dispatch boundary.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}
