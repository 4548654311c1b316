//! Decorative glyph identifiers. Rendering is up to the host.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Sprout,
    Home,
    LogIn,
    LogOut,
    Leaf,
    Zap,
    Shield,
    Sun,
    Moon,
    Monitor,
}

impl Icon {
    /// Accessible label for the glyph.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sprout => "sprout",
            Self::Home => "home",
            Self::LogIn => "log in",
            Self::LogOut => "log out",
            Self::Leaf => "leaf",
            Self::Zap => "lightning",
            Self::Shield => "shield",
            Self::Sun => "light theme",
            Self::Moon => "dark theme",
            Self::Monitor => "system theme",
        }
    }
}
