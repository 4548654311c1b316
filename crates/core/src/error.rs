//! Core error types for Plantventory.
//!
//! Absence (no session, no display name, no animation root) is never an error;
//! these variants cover collaborators that actually failed and bad configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for Plantventory operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Collaborator failures
    #[error("session lookup failed: {reason}")]
    SessionLookupFailed { reason: String },

    #[error("profile lookup failed: {reason}")]
    ProfileLookupFailed { reason: String },

    // Configuration errors
    #[error("failed to read config '{path}': {reason}")]
    ConfigReadFailed { path: PathBuf, reason: String },

    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },

    #[error("invalid config field '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    // Parsing errors
    #[error("unknown theme '{0}' (expected light, dark or system)")]
    UnknownTheme(String),
}

impl Error {
    /// Create a session lookup error.
    pub fn session_lookup_failed(reason: impl Into<String>) -> Self {
        Self::SessionLookupFailed {
            reason: reason.into(),
        }
    }

    /// Create a profile lookup error.
    pub fn profile_lookup_failed(reason: impl Into<String>) -> Self {
        Self::ProfileLookupFailed {
            reason: reason.into(),
        }
    }

    /// Create a config read error.
    pub fn config_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error came from an external collaborator rather than local input.
    #[must_use]
    pub const fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            Self::SessionLookupFailed { .. } | Self::ProfileLookupFailed { .. }
        )
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::TomlParseFailed {
            reason: err.to_string(),
        }
    }
}
