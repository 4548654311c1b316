//! Application configuration.
//!
//! Loaded from TOML. Every section is optional; missing values fall back to
//! defaults that match the identity provider's standard handler paths.
//!
//! ```toml
//! [server]
//! bind_address = "127.0.0.1:3000"
//! static_dir = "crates/ui/dist"
//!
//! [auth]
//! sign_in = "/handler/sign-in"
//! sign_out = "/handler/sign-out"
//! sign_up = "/handler/signup"
//! account = "/handler/account-settings"
//! session_endpoint = "https://auth.example.com/api/v1/users/me"
//!
//! [theme]
//! default = "system"
//!
//! [[profiles]]
//! user_id = "user-123"
//! name = "Ada"
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;
use crate::result::Result;
use crate::session::{InMemoryProfiles, Profile, UserId};
use crate::theme::Theme;

/// Identity-provider URLs the UI links to. Never hardcoded in components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthUrls {
    pub sign_in: String,
    pub sign_out: String,
    pub sign_up: String,
    pub account: String,
}

impl Default for AuthUrls {
    fn default() -> Self {
        Self {
            sign_in: "/handler/sign-in".to_string(),
            sign_out: "/handler/sign-out".to_string(),
            sign_up: "/handler/signup".to_string(),
            account: "/handler/account-settings".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            static_dir: PathBuf::from("crates/ui/dist"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    #[serde(flatten)]
    pub urls: AuthUrls,
    /// Identity-provider endpoint answering "who is this cookie". Unset means
    /// pages render for anonymous visitors only.
    pub session_endpoint: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub default: Theme,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub user_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub theme: ThemeConfig,
    pub profiles: Vec<ProfileEntry>,
}

/// The subset of configuration the browser fetches at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub auth: AuthUrls,
    pub theme: Theme,
    /// Whether the server can resolve sessions. When false the navigation bar
    /// renders the anonymous state without asking.
    pub session_lookup: bool,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::TomlParseFailed` for malformed TOML or unknown values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigReadFailed` if the file cannot be read and
    /// `Error::TomlParseFailed` if it is not valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::config_read_failed(path, e.to_string()))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Check values that parse but cannot work.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        self.server
            .bind_address
            .parse::<SocketAddr>()
            .map_err(|e| Error::invalid_config("server.bind_address", e.to_string()))?;

        let urls = &self.auth.urls;
        [
            ("auth.sign_in", &urls.sign_in),
            ("auth.sign_out", &urls.sign_out),
            ("auth.sign_up", &urls.sign_up),
            ("auth.account", &urls.account),
        ]
        .into_iter()
        .try_for_each(|(field, value)| validate_link(field, value))?;

        if let Some(endpoint) = &self.auth.session_endpoint {
            Url::parse(endpoint)
                .map_err(|e| Error::invalid_config("auth.session_endpoint", e.to_string()))?;
        }

        if let Some(entry) = self.profiles.iter().find(|p| p.user_id.trim().is_empty()) {
            return Err(Error::invalid_config(
                "profiles.user_id",
                format!("empty user id for profile '{}'", entry.name),
            ));
        }

        Ok(())
    }

    /// What the browser is allowed to know.
    #[must_use]
    pub fn client(&self) -> ClientConfig {
        ClientConfig {
            auth: self.auth.urls.clone(),
            theme: self.theme.default,
            session_lookup: self.auth.session_endpoint.is_some(),
        }
    }

    /// Profile directory seeded from `[[profiles]]`.
    #[must_use]
    pub fn profile_directory(&self) -> InMemoryProfiles {
        self.profiles
            .iter()
            .map(|p| (UserId::new(p.user_id.clone()), Profile::named(p.name.clone())))
            .collect()
    }
}

/// Links are either app-relative paths or absolute URLs.
fn validate_link(field: &str, value: &str) -> Result<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::invalid_config(field, "must not be empty"));
    }
    if value.starts_with('/') {
        return Ok(());
    }
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| Error::invalid_config(field, format!("not a path or absolute URL: {e}")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn given_default_config_when_validated_then_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.auth.urls.sign_in, "/handler/sign-in");
        assert!(!config.client().session_lookup);
    }

    #[test]
    fn given_partial_toml_when_parsed_then_missing_fields_defaulted() {
        let config = AppConfig::from_toml_str(
            r#"
            [auth]
            sign_in = "https://auth.example.com/sign-in"
            session_endpoint = "https://auth.example.com/api/v1/users/me"

            [theme]
            default = "dark"

            [[profiles]]
            user_id = "u-1"
            name = "Ada"
            "#,
        )
        .unwrap();

        assert_eq!(config.auth.urls.sign_in, "https://auth.example.com/sign-in");
        assert_eq!(config.auth.urls.sign_out, "/handler/sign-out");
        assert_eq!(config.theme.default, Theme::Dark);
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.profile_directory().len(), 1);
        assert!(config.validate().is_ok());

        let client = config.client();
        assert!(client.session_lookup);
        assert_eq!(client.auth, config.auth.urls);
    }

    #[test]
    fn given_empty_sign_in_when_validated_then_field_named() {
        let mut config = AppConfig::default();
        config.auth.urls.sign_in = "  ".to_string();

        assert_eq!(
            config.validate(),
            Err(Error::invalid_config("auth.sign_in", "must not be empty"))
        );
    }

    #[test]
    fn given_relative_without_slash_when_validated_then_rejected() {
        let mut config = AppConfig::default();
        config.auth.urls.sign_out = "handler/sign-out".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { ref field, .. } if field == "auth.sign_out"));
    }

    #[test]
    fn given_bad_bind_address_when_validated_then_rejected() {
        let mut config = AppConfig::default();
        config.server.bind_address = "localhost".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { ref field, .. } if field == "server.bind_address"));
    }

    #[test]
    fn given_unknown_theme_when_parsed_then_toml_error() {
        let result = AppConfig::from_toml_str("[theme]\ndefault = \"neon\"\n");
        assert!(matches!(result, Err(Error::TomlParseFailed { .. })));
    }

    #[test]
    fn given_missing_file_when_loading_then_read_error() {
        let result = AppConfig::load("/definitely/not/here/plantventory.toml");
        assert!(matches!(result, Err(Error::ConfigReadFailed { .. })));
    }

    #[test]
    fn given_config_file_when_loading_then_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plantventory.toml");
        std::fs::write(&path, "[server]\nbind_address = \"0.0.0.0:8080\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
    }
}
