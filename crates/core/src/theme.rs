//! Color theme preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::icon::Icon;

/// Theme preference. `System` follows the operating system setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// `localStorage` key the browser widget persists the choice under.
    pub const STORAGE_KEY: &'static str = "plantventory-theme";

    /// Next preference in the light, dark, system cycle.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Class applied to the document root. `None` leaves it to `prefers-color-scheme`.
    #[must_use]
    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Light => Some("light"),
            Self::Dark => Some("dark"),
            Self::System => None,
        }
    }

    #[must_use]
    pub const fn icon(self) -> Icon {
        match self {
            Self::Light => Icon::Sun,
            Self::Dark => Icon::Moon,
            Self::System => Icon::Monitor,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_any_theme_when_toggled_three_times_then_back_to_start() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            assert_eq!(theme.toggle().toggle().toggle(), theme);
            assert_ne!(theme.toggle(), theme);
        }
    }

    #[test]
    fn given_display_output_when_parsed_then_same_theme() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
        assert_eq!(" Dark ".parse::<Theme>(), Ok(Theme::Dark));
    }

    #[test]
    fn given_unknown_name_when_parsed_then_error() {
        assert_eq!(
            "neon".parse::<Theme>(),
            Err(Error::UnknownTheme("neon".to_string()))
        );
    }

    #[test]
    fn given_system_theme_when_asking_class_then_none() {
        assert_eq!(Theme::System.css_class(), None);
        assert_eq!(Theme::Dark.css_class(), Some("dark"));
    }
}
