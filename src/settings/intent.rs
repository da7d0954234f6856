use crate::mvi::Intent;
use crate::prefs::PrefSnapshot;

#[derive(Debug, Clone)]
pub enum SettingsIntent {
    /// Store echo; hydrates the persisted fields.
    PreferencesUpdated(PrefSnapshot),
    ChangeFirstName(String),
    ChangeLastName(String),
    ChangeUsername(String),
    ChangePassword(String),
    /// Pass-through toggles: the store is told the negated current value,
    /// local flags move on the echo.
    ChangeDarkTheme,
    ChangeAlwaysSync,
    /// Start a sign-in attempt. Rejected as a no-op while one is already
    /// in flight.
    Authenticate { username: String, password: String },
    /// Provider presence callback.
    AuthStateChanged(bool),
    AuthSucceeded,
    AuthFailed(String),
}

impl Intent for SettingsIntent {}
