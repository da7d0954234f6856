//! State/event core for the jikannoto note-taking app's presentation layer.
//!
//! The crate owns the UI-bound state (which screen is active, whether the
//! user is signed in, the persisted theme and profile fields) and exposes
//! it to an external renderer as immutable snapshots on watch
//! channels. The renderer never mutates state directly: it dispatches
//! intents into a core, a single task per core serializes them through a
//! pure reducer, and one-shot side effects (navigation, snackbars) travel
//! on a separate fire-and-forget event bus.
//!
//! Collaborators are injected at construction: a [`prefs::PreferenceStore`]
//! for persisted settings and an [`auth::AuthProvider`] for sign-in. Both
//! are traits, so tests and offline builds swap in the in-process
//! implementations this crate ships.

use std::future::Future;
use std::pin::Pin;

pub mod app;
pub mod auth;
pub mod events;
pub mod mvi;
pub mod nav;
pub mod prefs;
pub mod settings;
pub mod shutdown;

/// Owned future type used by the collaborator traits so they stay
/// object-safe while exposing async operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
