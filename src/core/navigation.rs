use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Screens of the app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", content = "params")]
pub enum Screen {
    Onboarding,
    Login,
    Register,
    CreateProfile,
    Browse,
    Likes,
    Messages,
    Profile,
    Chat {
        #[serde(rename = "userId")]
        user_id: String,
    },
}

impl Screen {
    /// Screens reachable before logging in
    pub fn is_public(&self) -> bool {
        matches!(self, Screen::Onboarding | Screen::Login | Screen::Register)
    }

    fn tab(&self) -> Option<TabKind> {
        match self {
            Screen::Browse => Some(TabKind::Browse),
            Screen::Likes => Some(TabKind::Likes),
            Screen::Messages | Screen::Chat { .. } => Some(TabKind::Messages),
            Screen::Profile => Some(TabKind::Profile),
            _ => None,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Chat { user_id } => write!(f, "Chat({})", user_id),
            other => write!(f, "{:?}", other),
        }
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Onboarding" => Ok(Screen::Onboarding),
            "Login" => Ok(Screen::Login),
            "Register" => Ok(Screen::Register),
            "CreateProfile" => Ok(Screen::CreateProfile),
            "Browse" => Ok(Screen::Browse),
            "Likes" => Ok(Screen::Likes),
            "Messages" => Ok(Screen::Messages),
            "Profile" => Ok(Screen::Profile),
            _ => match s.strip_prefix("Chat:") {
                Some(user_id) => Ok(Screen::Chat {
                    user_id: user_id.to_string(),
                }),
                None => Err(format!("Unknown screen: {}", s)),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabKind {
    Browse,
    Likes,
    Messages,
    Profile,
}

impl TabKind {
    pub const ALL: [TabKind; 4] = [
        TabKind::Browse,
        TabKind::Likes,
        TabKind::Messages,
        TabKind::Profile,
    ];

    pub fn icon(self) -> &'static str {
        match self {
            TabKind::Browse => "explore",
            TabKind::Likes => "favorite",
            TabKind::Messages => "message",
            TabKind::Profile => "person",
        }
    }

    pub fn screen(self) -> Screen {
        match self {
            TabKind::Browse => Screen::Browse,
            TabKind::Likes => Screen::Likes,
            TabKind::Messages => Screen::Messages,
            TabKind::Profile => Screen::Profile,
        }
    }
}

/// One item of the shared bottom tab bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub name: TabKind,
    pub icon: String,
    pub active: bool,
}

/// Footer tabs with the one owning `screen` marked active
pub fn footer_tabs(screen: &Screen) -> Vec<Tab> {
    let active = screen.tab();
    TabKind::ALL
        .iter()
        .map(|&kind| Tab {
            name: kind,
            icon: kind.icon().to_string(),
            active: active == Some(kind),
        })
        .collect()
}

/// Where the app lands after login or registration
pub fn home_screen(has_profile: bool) -> Screen {
    if has_profile {
        Screen::Browse
    } else {
        Screen::CreateProfile
    }
}

/// Gate a requested screen on login and profile state
pub fn resolve(requested: Screen, logged_in: bool, has_profile: bool) -> Screen {
    if requested.is_public() {
        return requested;
    }
    if !logged_in {
        return Screen::Onboarding;
    }
    if !has_profile && requested != Screen::CreateProfile {
        return Screen::CreateProfile;
    }
    requested
}
