//! Shared test utilities and stub collaborators.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use jikannoto_core::auth::{AuthError, AuthProvider};
use jikannoto_core::prefs::{MemoryPrefStore, PrefSnapshot, PreferenceStore, PrefsError};
use jikannoto_core::BoxFuture;
use parking_lot::Mutex;
use tokio::sync::watch;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Give the dispatch tasks a moment to drain their queues.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

/// Await a state snapshot matching the predicate, bailing out after two
/// seconds so a broken core fails the test instead of hanging it.
pub async fn wait_for<T, F>(rx: &mut watch::Receiver<T>, predicate: F) -> T
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            {
                let current = rx.borrow();
                if predicate(&current) {
                    return current.clone();
                }
            }
            rx.changed().await.expect("state channel closed");
        }
    })
    .await
    .expect("condition not met within timeout")
}

/// Provider whose sign-in never resolves. Counts attempts so tests can
/// assert the single-flight guard.
pub struct HangingAuthProvider {
    presence: watch::Sender<bool>,
    attempts: Arc<AtomicUsize>,
}

impl HangingAuthProvider {
    pub fn new() -> Self {
        let (presence, _) = watch::channel(false);
        Self {
            presence,
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl AuthProvider for HangingAuthProvider {
    fn subscribe(&self) -> watch::Receiver<bool> {
        self.presence.subscribe()
    }

    fn sign_in(
        &self,
        _username: String,
        _password: String,
    ) -> BoxFuture<'static, Result<(), AuthError>> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Box::pin(std::future::pending())
    }
}

/// Store that acknowledges writes without ever echoing a snapshot back.
/// Lets tests observe that toggles alone never move local state.
pub struct SilentPrefStore {
    tx: watch::Sender<Option<PrefSnapshot>>,
    writes: Mutex<Vec<bool>>,
}

impl SilentPrefStore {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            tx,
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Dark-theme values written through so far.
    pub fn dark_theme_writes(&self) -> Vec<bool> {
        self.writes.lock().clone()
    }
}

impl PreferenceStore for SilentPrefStore {
    fn subscribe(&self) -> watch::Receiver<Option<PrefSnapshot>> {
        self.tx.subscribe()
    }

    fn set_dark_theme(&self, value: bool) -> BoxFuture<'_, Result<(), PrefsError>> {
        Box::pin(async move {
            self.writes.lock().push(value);
            Ok(())
        })
    }

    fn set_display_name(
        &self,
        _first: String,
        _last: String,
    ) -> BoxFuture<'_, Result<(), PrefsError>> {
        Box::pin(async { Ok(()) })
    }

    fn set_always_sync(&self, _value: bool) -> BoxFuture<'_, Result<(), PrefsError>> {
        Box::pin(async { Ok(()) })
    }
}

/// Store whose writes only resolve after a fixed delay. Lets tests
/// assert that dispatch keeps moving while a write-through is in flight.
pub struct SlowPrefStore {
    inner: MemoryPrefStore,
    delay: Duration,
}

impl SlowPrefStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: MemoryPrefStore::new(),
            delay,
        }
    }
}

impl PreferenceStore for SlowPrefStore {
    fn subscribe(&self) -> watch::Receiver<Option<PrefSnapshot>> {
        self.inner.subscribe()
    }

    fn set_dark_theme(&self, value: bool) -> BoxFuture<'_, Result<(), PrefsError>> {
        Box::pin(async move {
            tokio::time::sleep(self.delay).await;
            self.inner.set_dark_theme(value).await
        })
    }

    fn set_display_name(
        &self,
        first: String,
        last: String,
    ) -> BoxFuture<'_, Result<(), PrefsError>> {
        Box::pin(async move {
            tokio::time::sleep(self.delay).await;
            self.inner.set_display_name(first, last).await
        })
    }

    fn set_always_sync(&self, value: bool) -> BoxFuture<'_, Result<(), PrefsError>> {
        Box::pin(async move {
            tokio::time::sleep(self.delay).await;
            self.inner.set_always_sync(value).await
        })
    }
}

/// Store whose writes always fail.
pub struct FailingPrefStore {
    tx: watch::Sender<Option<PrefSnapshot>>,
}

impl FailingPrefStore {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    pub fn with_snapshot(snapshot: PrefSnapshot) -> Self {
        let (tx, _) = watch::channel(Some(snapshot));
        Self { tx }
    }

    fn write_error() -> PrefsError {
        PrefsError::Io {
            path: PathBuf::from("/nonexistent/preferences.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
    }
}

impl PreferenceStore for FailingPrefStore {
    fn subscribe(&self) -> watch::Receiver<Option<PrefSnapshot>> {
        self.tx.subscribe()
    }

    fn set_dark_theme(&self, _value: bool) -> BoxFuture<'_, Result<(), PrefsError>> {
        Box::pin(async { Err(Self::write_error()) })
    }

    fn set_display_name(
        &self,
        _first: String,
        _last: String,
    ) -> BoxFuture<'_, Result<(), PrefsError>> {
        Box::pin(async { Err(Self::write_error()) })
    }

    fn set_always_sync(&self, _value: bool) -> BoxFuture<'_, Result<(), PrefsError>> {
        Box::pin(async { Err(Self::write_error()) })
    }
}
