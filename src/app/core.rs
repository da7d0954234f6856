use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::app::intent::AppIntent;
use crate::app::reducer::AppReducer;
use crate::app::state::AppState;
use crate::auth::AuthProvider;
use crate::events::{AppEvent, EventBus};
use crate::mvi::Reducer;
use crate::prefs::PreferenceStore;
use crate::shutdown::ShutdownHandle;

/// Owner of [`AppState`].
///
/// Construction subscribes to both collaborators and spawns the dispatch
/// task; the subscriptions live until shutdown. All mutation, dispatched
/// intents and collaborator notifications alike, is serialized through
/// that one task, so observers on the watch channel only ever see
/// complete snapshots.
pub struct AppCore {
    intent_tx: mpsc::UnboundedSender<AppIntent>,
    state_rx: watch::Receiver<AppState>,
    events: Arc<EventBus>,
    shutdown: ShutdownHandle,
}

impl AppCore {
    pub fn new(
        prefs: Arc<dyn PreferenceStore>,
        auth: Arc<dyn AuthProvider>,
        events: Arc<EventBus>,
    ) -> Self {
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(AppState::default());
        let shutdown = ShutdownHandle::new();

        tokio::spawn(run(
            intent_rx,
            state_tx,
            prefs,
            auth,
            Arc::clone(&events),
            shutdown.clone(),
        ));

        Self {
            intent_tx,
            state_rx,
            events,
            shutdown,
        }
    }

    /// Queue an intent for the dispatch task. Never blocks.
    pub fn dispatch(&self, intent: AppIntent) {
        let _ = self.intent_tx.send(intent);
    }

    /// Current snapshot.
    pub fn state(&self) -> AppState {
        self.state_rx.borrow().clone()
    }

    /// Subscribe to state snapshots.
    pub fn watch(&self) -> watch::Receiver<AppState> {
        self.state_rx.clone()
    }

    /// The one-shot event bus shared with the settings flow.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    /// Stop the dispatch task and drop collaborator subscriptions.
    pub fn shutdown(&self) {
        self.shutdown.signal();
    }
}

async fn run(
    mut intent_rx: mpsc::UnboundedReceiver<AppIntent>,
    state_tx: watch::Sender<AppState>,
    prefs: Arc<dyn PreferenceStore>,
    auth: Arc<dyn AuthProvider>,
    events: Arc<EventBus>,
    shutdown: ShutdownHandle,
) {
    let mut prefs_rx = prefs.subscribe();
    let mut auth_rx = auth.subscribe();
    // Fold the collaborators' construction-time values through the same
    // path as later notifications.
    prefs_rx.mark_changed();
    auth_rx.mark_changed();

    let mut state = AppState::default();
    let mut prefs_open = true;
    let mut auth_open = true;

    loop {
        tokio::select! {
            _ = shutdown.wait() => break,

            changed = prefs_rx.changed(), if prefs_open => match changed {
                Ok(()) => {
                    let snapshot = prefs_rx.borrow_and_update().clone();
                    if let Some(snapshot) = snapshot {
                        state = AppReducer::reduce(state, AppIntent::PreferencesUpdated(snapshot));
                        let _ = state_tx.send(state.clone());
                    }
                }
                Err(_) => prefs_open = false,
            },

            changed = auth_rx.changed(), if auth_open => match changed {
                Ok(()) => {
                    let present = *auth_rx.borrow_and_update();
                    state = AppReducer::reduce(state, AppIntent::AuthChanged(present));
                    let _ = state_tx.send(state.clone());
                }
                Err(_) => auth_open = false,
            },

            intent = intent_rx.recv() => match intent {
                None => break,
                Some(AppIntent::ToggleDarkTheme) => {
                    // Write-through only; the flag moves on the store's echo.
                    // The round trip runs off-task so queued intents and
                    // collaborator echoes never stall behind the store.
                    let target = !state.dark_theme;
                    let prefs = Arc::clone(&prefs);
                    let events = Arc::clone(&events);
                    tokio::spawn(async move {
                        if let Err(err) = prefs.set_dark_theme(target).await {
                            tracing::warn!(error = %err, "theme write-through failed, state unchanged");
                            events.emit(AppEvent::ShowSnackbar(
                                "couldn't save theme preference".to_string(),
                            ));
                        }
                    });
                }
                Some(intent) => {
                    state = AppReducer::reduce(state, intent);
                    let _ = state_tx.send(state.clone());
                }
            },
        }
    }

    tracing::info!("app core stopped");
}
