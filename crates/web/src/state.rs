//! Shared handler state.

use std::sync::Arc;

use plantventory_core::{AppConfig, ClientConfig, InMemoryProfiles, ProfileLookup, Result};

use crate::identity::SessionStrategy;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<ClientConfig>,
    pub sessions: SessionStrategy,
    pub profiles: Arc<dyn ProfileLookup>,
}

impl AppState {
    #[must_use]
    pub fn new(
        client: ClientConfig,
        sessions: SessionStrategy,
        profiles: Arc<dyn ProfileLookup>,
    ) -> Self {
        let client = ClientConfig {
            session_lookup: sessions.can_authenticate(),
            ..client
        };
        Self {
            client: Arc::new(client),
            sessions,
            profiles,
        }
    }

    /// Build state from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the session endpoint is unusable.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let sessions = match &config.auth.session_endpoint {
            Some(endpoint) => SessionStrategy::provider(endpoint)?,
            None => SessionStrategy::Anonymous,
        };
        let profiles: InMemoryProfiles = config.profile_directory();
        tracing::info!(
            session_lookup = sessions.can_authenticate(),
            profiles = profiles.len(),
            "application state ready"
        );
        Ok(Self::new(config.client(), sessions, Arc::new(profiles)))
    }
}
