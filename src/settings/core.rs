use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};

use crate::auth::{AuthError, AuthProvider};
use crate::events::{AppEvent, EventBus};
use crate::mvi::Reducer;
use crate::nav::Screen;
use crate::prefs::PreferenceStore;
use crate::settings::intent::SettingsIntent;
use crate::settings::reducer::SettingsReducer;
use crate::settings::state::SettingsState;
use crate::shutdown::ShutdownHandle;

/// Bound on an in-flight sign-in round trip; expiry converts the attempt
/// to a failure the user can retry.
pub const DEFAULT_AUTH_TIMEOUT: Duration = Duration::from_secs(30);

/// Owner of [`SettingsState`] and driver of the sign-in machine.
///
/// Same serialized-dispatch construction as the app core: one task owns
/// the state, collaborator echoes and dispatched intents are funneled
/// through it, and sign-in is the only operation that suspends. At most
/// one attempt is in flight; completion re-enters the queue as an intent.
/// A successful sign-in emits exactly one `Navigate(Home)` on the shared
/// event bus.
pub struct SettingsCore {
    intent_tx: mpsc::UnboundedSender<SettingsIntent>,
    state_rx: watch::Receiver<SettingsState>,
    shutdown: ShutdownHandle,
}

impl SettingsCore {
    pub fn new(
        prefs: Arc<dyn PreferenceStore>,
        auth: Arc<dyn AuthProvider>,
        events: Arc<EventBus>,
    ) -> Self {
        Self::with_auth_timeout(prefs, auth, events, DEFAULT_AUTH_TIMEOUT)
    }

    /// Construct with an explicit sign-in timeout.
    pub fn with_auth_timeout(
        prefs: Arc<dyn PreferenceStore>,
        auth: Arc<dyn AuthProvider>,
        events: Arc<EventBus>,
        auth_timeout: Duration,
    ) -> Self {
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SettingsState::default());
        let shutdown = ShutdownHandle::new();

        tokio::spawn(run(
            intent_rx,
            state_tx,
            prefs,
            auth,
            events,
            shutdown.clone(),
            auth_timeout,
        ));

        Self {
            intent_tx,
            state_rx,
            shutdown,
        }
    }

    /// Queue an intent for the dispatch task. Never blocks.
    pub fn dispatch(&self, intent: SettingsIntent) {
        let _ = self.intent_tx.send(intent);
    }

    /// Current snapshot.
    pub fn state(&self) -> SettingsState {
        self.state_rx.borrow().clone()
    }

    /// Subscribe to state snapshots.
    pub fn watch(&self) -> watch::Receiver<SettingsState> {
        self.state_rx.clone()
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    /// Stop the dispatch task and drop collaborator subscriptions.
    pub fn shutdown(&self) {
        self.shutdown.signal();
    }
}

/// Reduce a pure intent, publish the snapshot, and emit the one-shot
/// navigate event when the sign-in machine lands on success.
fn apply(
    state: SettingsState,
    intent: SettingsIntent,
    state_tx: &watch::Sender<SettingsState>,
    events: &EventBus,
) -> SettingsState {
    let succeeded = matches!(intent, SettingsIntent::AuthSucceeded);
    let state = SettingsReducer::reduce(state, intent);
    let _ = state_tx.send(state.clone());
    if succeeded {
        events.emit(AppEvent::Navigate(Screen::Home));
    }
    state
}

async fn run(
    mut intent_rx: mpsc::UnboundedReceiver<SettingsIntent>,
    state_tx: watch::Sender<SettingsState>,
    prefs: Arc<dyn PreferenceStore>,
    auth: Arc<dyn AuthProvider>,
    events: Arc<EventBus>,
    shutdown: ShutdownHandle,
    auth_timeout: Duration,
) {
    let mut prefs_rx = prefs.subscribe();
    let mut auth_rx = auth.subscribe();
    prefs_rx.mark_changed();
    auth_rx.mark_changed();

    let mut state = SettingsState::default();
    let mut prefs_open = true;
    let mut auth_open = true;
    // Completion slot for the single in-flight sign-in attempt. The bool
    // guards the select branch so the slot itself is only borrowed by the
    // branch future, never by the precondition.
    let mut auth_pending = false;
    let mut pending_auth: Option<oneshot::Receiver<Result<(), AuthError>>> = None;

    loop {
        tokio::select! {
            _ = shutdown.wait() => break,

            changed = prefs_rx.changed(), if prefs_open => match changed {
                Ok(()) => {
                    let snapshot = prefs_rx.borrow_and_update().clone();
                    if let Some(snapshot) = snapshot {
                        state = apply(
                            state,
                            SettingsIntent::PreferencesUpdated(snapshot),
                            &state_tx,
                            &events,
                        );
                    }
                }
                Err(_) => prefs_open = false,
            },

            changed = auth_rx.changed(), if auth_open => match changed {
                Ok(()) => {
                    let present = *auth_rx.borrow_and_update();
                    state = apply(
                        state,
                        SettingsIntent::AuthStateChanged(present),
                        &state_tx,
                        &events,
                    );
                }
                Err(_) => auth_open = false,
            },

            result = async { pending_auth.as_mut().expect("guarded by auth_pending").await },
                if auth_pending =>
            {
                auth_pending = false;
                pending_auth = None;
                let intent = match result {
                    Ok(Ok(())) => SettingsIntent::AuthSucceeded,
                    Ok(Err(err)) => SettingsIntent::AuthFailed(err.to_string()),
                    // The attempt task can only vanish on runtime teardown.
                    Err(_) => SettingsIntent::AuthFailed(
                        AuthError::Provider("sign-in aborted".to_string()).to_string(),
                    ),
                };
                state = apply(state, intent, &state_tx, &events);
            },

            intent = intent_rx.recv() => match intent {
                None => break,
                Some(SettingsIntent::Authenticate { username, password }) => {
                    if state.auth_in_progress {
                        tracing::debug!("sign-in already in flight, intent rejected");
                        continue;
                    }
                    state = apply(
                        state,
                        SettingsIntent::Authenticate { username, password },
                        &state_tx,
                        &events,
                    );

                    let attempt = auth.sign_in(state.username.clone(), state.password.clone());
                    let (done_tx, done_rx) = oneshot::channel();
                    tokio::spawn(async move {
                        let result = match tokio::time::timeout(auth_timeout, attempt).await {
                            Ok(result) => result,
                            Err(_) => Err(AuthError::Timeout),
                        };
                        let _ = done_tx.send(result);
                    });
                    auth_pending = true;
                    pending_auth = Some(done_rx);
                }
                Some(SettingsIntent::ChangeDarkTheme) => {
                    // Write-throughs run off-task, like the sign-in attempt,
                    // so the dispatch queue never stalls behind the store.
                    let target = !state.dark_theme;
                    let prefs = Arc::clone(&prefs);
                    tokio::spawn(async move {
                        if let Err(err) = prefs.set_dark_theme(target).await {
                            tracing::warn!(error = %err, "theme write-through failed, state unchanged");
                        }
                    });
                }
                Some(SettingsIntent::ChangeAlwaysSync) => {
                    let target = !state.always_sync;
                    let prefs = Arc::clone(&prefs);
                    tokio::spawn(async move {
                        if let Err(err) = prefs.set_always_sync(target).await {
                            tracing::warn!(error = %err, "sync write-through failed, state unchanged");
                        }
                    });
                }
                Some(intent @ (SettingsIntent::ChangeFirstName(_)
                    | SettingsIntent::ChangeLastName(_))) =>
                {
                    state = apply(state, intent, &state_tx, &events);
                    // Persist the profile so it survives restart; the
                    // store echo re-hydrates both cores.
                    let first = state.first_name.clone();
                    let last = state.last_name.clone();
                    let prefs = Arc::clone(&prefs);
                    tokio::spawn(async move {
                        if let Err(err) = prefs.set_display_name(first, last).await {
                            tracing::warn!(error = %err, "profile write-through failed");
                        }
                    });
                }
                Some(intent) => {
                    state = apply(state, intent, &state_tx, &events);
                }
            },
        }
    }

    tracing::info!("settings core stopped");
}
