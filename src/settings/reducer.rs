use crate::mvi::Reducer;
use crate::settings::intent::SettingsIntent;
use crate::settings::state::{AuthPhase, SettingsState};

pub struct SettingsReducer;

/// Field edits pull an untouched form into `Editing`; an authenticated
/// or in-flight phase is left alone.
fn editing_phase(phase: AuthPhase) -> AuthPhase {
    match phase {
        AuthPhase::Anonymous | AuthPhase::Editing => AuthPhase::Editing,
        other => other,
    }
}

impl Reducer for SettingsReducer {
    type State = SettingsState;
    type Intent = SettingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SettingsIntent::PreferencesUpdated(snapshot) => SettingsState {
                first_name: snapshot.first_name,
                last_name: snapshot.last_name,
                dark_theme: snapshot.dark_theme,
                always_sync: snapshot.always_sync,
                ..state
            },
            SettingsIntent::ChangeFirstName(first_name) => SettingsState {
                first_name,
                phase: editing_phase(state.phase),
                ..state
            },
            SettingsIntent::ChangeLastName(last_name) => SettingsState {
                last_name,
                phase: editing_phase(state.phase),
                ..state
            },
            SettingsIntent::ChangeUsername(username) => SettingsState {
                username,
                phase: editing_phase(state.phase),
                ..state
            },
            SettingsIntent::ChangePassword(password) => SettingsState {
                password,
                phase: editing_phase(state.phase),
                ..state
            },
            // Pure no-ops: write-throughs happen in the core, the flags
            // move on the store's echo.
            SettingsIntent::ChangeDarkTheme | SettingsIntent::ChangeAlwaysSync => state,
            SettingsIntent::Authenticate { username, password } => {
                if state.auth_in_progress {
                    // Single-flight: a second attempt while one is in
                    // flight is rejected wholesale.
                    return state;
                }
                SettingsState {
                    username,
                    password,
                    phase: AuthPhase::Authenticating,
                    auth_in_progress: true,
                    error: false,
                    error_message: String::new(),
                    ..state
                }
            }
            SettingsIntent::AuthStateChanged(true) => SettingsState {
                phase: AuthPhase::Authenticated,
                ..state
            },
            SettingsIntent::AuthStateChanged(false) => match state.phase {
                AuthPhase::Authenticated => SettingsState {
                    phase: AuthPhase::Anonymous,
                    ..state
                },
                _ => state,
            },
            SettingsIntent::AuthSucceeded => SettingsState {
                phase: AuthPhase::Authenticated,
                auth_in_progress: false,
                error: false,
                error_message: String::new(),
                password: String::new(),
                ..state
            },
            SettingsIntent::AuthFailed(message) => SettingsState {
                phase: AuthPhase::Failed,
                auth_in_progress: false,
                error: true,
                error_message: message,
                ..state
            },
        }
    }
}
