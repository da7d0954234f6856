use crate::app::intent::AppIntent;
use crate::app::state::AppState;
use crate::mvi::Reducer;
use crate::nav::resolve_route;

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppIntent::AuthChanged(authenticated) => AppState {
                authenticated,
                ..state
            },
            AppIntent::PreferencesUpdated(snapshot) => AppState {
                loading: false,
                dark_theme: snapshot.dark_theme,
                display_name: (snapshot.first_name, snapshot.last_name),
                ..state
            },
            // Pure no-op: the write-through happens in the core, and the
            // flag only moves on the store's echo.
            AppIntent::ToggleDarkTheme => state,
            AppIntent::NavigateTo(screen) => AppState {
                current_screen: screen,
                ..state
            },
            AppIntent::NavigateByRoute(token) => AppState {
                current_screen: resolve_route(&token),
                ..state
            },
        }
    }
}
