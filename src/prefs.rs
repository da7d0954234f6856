//! Preference store contract and the in-process implementations.
//!
//! The cores treat the store as an opaque asynchronous key-value
//! collaborator: they subscribe to a stream of snapshots and issue
//! write-throughs, never mutating local state optimistically. The stream
//! starts at `None` until the first snapshot exists, which is what drives
//! the app-level `loading` flag.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;

use crate::BoxFuture;

/// Point-in-time copy of every persisted preference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrefSnapshot {
    pub dark_theme: bool,
    pub first_name: String,
    pub last_name: String,
    pub always_sync: bool,
}

/// Errors that can occur while persisting preferences.
///
/// All of these are recoverable: callers log them and leave state
/// unchanged; the next write retries from scratch.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to write preference file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode preferences: {source}")]
    Encode {
        #[source]
        source: toml::ser::Error,
    },

    #[error("failed to parse preference file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Asynchronous key-value store for user preferences.
///
/// `subscribe` yields the current snapshot and every subsequent change;
/// the receiver holds `None` until a first snapshot exists. Writers
/// receive an async ack and must treat failure as non-fatal.
pub trait PreferenceStore: Send + Sync {
    fn subscribe(&self) -> watch::Receiver<Option<PrefSnapshot>>;

    fn set_dark_theme(&self, value: bool) -> BoxFuture<'_, Result<(), PrefsError>>;

    fn set_display_name(
        &self,
        first: String,
        last: String,
    ) -> BoxFuture<'_, Result<(), PrefsError>>;

    fn set_always_sync(&self, value: bool) -> BoxFuture<'_, Result<(), PrefsError>>;
}

/// In-process store with no persistence. Default collaborator for tests
/// and previews.
pub struct MemoryPrefStore {
    tx: watch::Sender<Option<PrefSnapshot>>,
}

impl MemoryPrefStore {
    /// Create an empty store: subscribers see `None` until the first
    /// write or `publish`.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    /// Create a store that already holds a snapshot.
    pub fn with_snapshot(snapshot: PrefSnapshot) -> Self {
        let (tx, _) = watch::channel(Some(snapshot));
        Self { tx }
    }

    /// Replace the current snapshot wholesale, notifying subscribers.
    pub fn publish(&self, snapshot: PrefSnapshot) {
        // send_replace lands even with zero receivers, so a value
        // published before anyone subscribes is still observable.
        self.tx.send_replace(Some(snapshot));
    }

    fn update(&self, apply: impl FnOnce(&mut PrefSnapshot)) {
        self.tx.send_modify(|current| {
            let mut snapshot = current.take().unwrap_or_default();
            apply(&mut snapshot);
            *current = Some(snapshot);
        });
    }
}

impl Default for MemoryPrefStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryPrefStore {
    fn subscribe(&self) -> watch::Receiver<Option<PrefSnapshot>> {
        self.tx.subscribe()
    }

    fn set_dark_theme(&self, value: bool) -> BoxFuture<'_, Result<(), PrefsError>> {
        Box::pin(async move {
            self.update(|s| s.dark_theme = value);
            Ok(())
        })
    }

    fn set_display_name(
        &self,
        first: String,
        last: String,
    ) -> BoxFuture<'_, Result<(), PrefsError>> {
        Box::pin(async move {
            self.update(|s| {
                s.first_name = first;
                s.last_name = last;
            });
            Ok(())
        })
    }

    fn set_always_sync(&self, value: bool) -> BoxFuture<'_, Result<(), PrefsError>> {
        Box::pin(async move {
            self.update(|s| s.always_sync = value);
            Ok(())
        })
    }
}

/// TOML-backed store under the platform config directory.
///
/// Missing file means default preferences; parse and write failures keep
/// the previous snapshot.
pub struct FilePrefStore {
    path: PathBuf,
    tx: watch::Sender<Option<PrefSnapshot>>,
    // Serializes read-modify-write cycles; both cores write through the
    // same store, and interleaved cycles would drop the loser's fields.
    write_lock: Mutex<()>,
}

impl FilePrefStore {
    /// Returns the default preference file path,
    /// `<config_dir>/jikannoto/preferences.toml`. Falls back to the
    /// current directory if the platform config dir is unavailable.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("jikannoto").join("preferences.toml")
    }

    /// Open the store at the default path.
    pub fn open() -> Result<Self, PrefsError> {
        Self::open_at(Self::default_path())
    }

    /// Open the store at an explicit path, loading the current snapshot.
    pub fn open_at(path: PathBuf) -> Result<Self, PrefsError> {
        let snapshot = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| PrefsError::Io {
                path: path.clone(),
                source: e,
            })?;
            toml::from_str(&content).map_err(|e| PrefsError::Parse {
                path: path.clone(),
                source: e,
            })?
        } else {
            PrefSnapshot::default()
        };

        let (tx, _) = watch::channel(Some(snapshot));
        Ok(Self {
            path,
            tx,
            write_lock: Mutex::new(()),
        })
    }

    /// Path this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, snapshot: &PrefSnapshot) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PrefsError::Io {
                path: self.path.clone(),
                source: e,
            })?;
        }
        let content =
            toml::to_string_pretty(snapshot).map_err(|e| PrefsError::Encode { source: e })?;
        fs::write(&self.path, content).map_err(|e| PrefsError::Io {
            path: self.path.clone(),
            source: e,
        })
    }

    fn update(&self, apply: impl FnOnce(&mut PrefSnapshot)) -> Result<(), PrefsError> {
        // Hold the lock across the whole cycle so a concurrent writer
        // cannot read the pre-persist snapshot. File I/O is fast enough
        // here that blocking the other writer briefly is fine.
        let _guard = self.write_lock.lock();
        let mut snapshot = self.tx.borrow().clone().unwrap_or_default();
        apply(&mut snapshot);
        self.persist(&snapshot)?;
        // send_replace lands even with zero receivers attached.
        self.tx.send_replace(Some(snapshot));
        Ok(())
    }
}

impl PreferenceStore for FilePrefStore {
    fn subscribe(&self) -> watch::Receiver<Option<PrefSnapshot>> {
        self.tx.subscribe()
    }

    fn set_dark_theme(&self, value: bool) -> BoxFuture<'_, Result<(), PrefsError>> {
        Box::pin(async move { self.update(|s| s.dark_theme = value) })
    }

    fn set_display_name(
        &self,
        first: String,
        last: String,
    ) -> BoxFuture<'_, Result<(), PrefsError>> {
        Box::pin(async move {
            self.update(|s| {
                s.first_name = first;
                s.last_name = last;
            })
        })
    }

    fn set_always_sync(&self, value: bool) -> BoxFuture<'_, Result<(), PrefsError>> {
        Box::pin(async move { self.update(|s| s.always_sync = value) })
    }
}
