//! User-settings flow: profile fields, sync/theme toggles and the
//! sign-in state machine (anonymous → editing → authenticating →
//! authenticated | failed).

mod core;
mod intent;
mod reducer;
mod state;

pub use self::core::{SettingsCore, DEFAULT_AUTH_TIMEOUT};
pub use intent::SettingsIntent;
pub use reducer::SettingsReducer;
pub use state::{AuthPhase, SettingsState};
