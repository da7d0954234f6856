//! Application-level state: authentication flag, theme, profile name and
//! the active screen, merged from the preference store and the auth
//! provider into one observable record.

mod core;
mod intent;
mod reducer;
mod state;

pub use self::core::AppCore;
pub use intent::AppIntent;
pub use reducer::AppReducer;
pub use state::AppState;
