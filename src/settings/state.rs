use crate::mvi::ViewState;

/// Where the sign-in machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPhase {
    /// No user, form untouched.
    #[default]
    Anonymous,
    /// User is editing profile or credential fields.
    Editing,
    /// Exactly one sign-in attempt is in flight.
    Authenticating,
    Authenticated,
    /// Last attempt failed; retry requires a fresh authenticate intent.
    Failed,
}

/// Settings screen state. `username` and `password` are form-transient
/// and never persisted; everything else mirrors the preference store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsState {
    pub first_name: String,
    pub last_name: String,
    pub dark_theme: bool,
    pub always_sync: bool,
    pub username: String,
    pub password: String,
    pub error: bool,
    pub error_message: String,
    pub auth_in_progress: bool,
    pub phase: AuthPhase,
}

impl ViewState for SettingsState {}
