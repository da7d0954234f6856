//! Screen identifiers, bottom-navigation descriptors and route-token
//! resolution.

/// The screens the renderer can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    UserSettings,
    CheckList,
}

impl Screen {
    /// Stable route token for deep links and navigation events.
    pub const fn route(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::UserSettings => "user-settings",
            Screen::CheckList => "check-list",
        }
    }
}

/// Resolve a route token to a screen.
///
/// Only the home token is matched; every other token, `"check-list"`
/// included, lands on `UserSettings`. This mirrors the shipped behavior
/// and is kept as-is pending product clarification.
pub fn resolve_route(token: &str) -> Screen {
    if token == Screen::Home.route() {
        Screen::Home
    } else {
        Screen::UserSettings
    }
}

/// Symbolic icon identifier; the renderer maps these to its own assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    AccountCircle,
    Inventory,
    CheckCircle,
}

/// Static bottom-navigation entry. Created once at startup, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub icon: NavIcon,
    pub label: &'static str,
    pub screen: Screen,
    pub ordinal: usize,
}

/// The fixed bottom-navigation bar contents, in display order.
pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        icon: NavIcon::AccountCircle,
        label: "User Settings",
        screen: Screen::UserSettings,
        ordinal: 0,
    },
    NavItem {
        icon: NavIcon::Inventory,
        label: "Notos",
        screen: Screen::Home,
        ordinal: 1,
    },
    NavItem {
        icon: NavIcon::CheckCircle,
        label: "Checklist",
        screen: Screen::CheckList,
        ordinal: 2,
    },
];
