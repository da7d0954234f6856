use crate::mvi::ViewState;
use crate::nav::Screen;

/// Top-level presentation state, replaced wholesale on every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub authenticated: bool,
    pub dark_theme: bool,
    /// True until the first preference snapshot arrives; cleared exactly
    /// once and never set again.
    pub loading: bool,
    /// (first, last) as persisted in the preference store.
    pub display_name: (String, String),
    pub current_screen: Screen,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            authenticated: false,
            dark_theme: false,
            loading: true,
            display_name: (String::new(), String::new()),
            current_screen: Screen::Home,
        }
    }
}

impl ViewState for AppState {}
