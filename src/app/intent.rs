use crate::mvi::Intent;
use crate::nav::Screen;
use crate::prefs::PrefSnapshot;

#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Auth provider reported a user appearing or disappearing.
    AuthChanged(bool),
    /// A fresh snapshot arrived from the preference store. The only
    /// transition that clears `loading`.
    PreferencesUpdated(PrefSnapshot),
    /// User toggled the theme. Write-through only: the local flag changes
    /// when the store echoes the new snapshot back, never before.
    ToggleDarkTheme,
    /// Bottom-navigation tap.
    NavigateTo(Screen),
    /// Deep-link style navigation by route token.
    NavigateByRoute(String),
}

impl Intent for AppIntent {}
