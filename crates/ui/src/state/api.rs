//! JSON calls to the Plantventory server.

use gloo_net::http::Request;
use plantventory_core::routes::api;
use plantventory_core::{ClientConfig, SessionView};
use serde::de::DeserializeOwned;

use crate::error::{Result, UiError};

/// Where the navigation bar gets its session from.
///
/// Chosen once from the server's [`ClientConfig`]: a deployment without an
/// identity provider never issues a session request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSource {
    /// No identity provider; always anonymous.
    Absent,
    /// Ask the server at `endpoint`.
    Lookup { endpoint: String },
}

impl SessionSource {
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        if config.session_lookup {
            Self::Lookup {
                endpoint: api::SESSION.to_string(),
            }
        } else {
            Self::Absent
        }
    }
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| UiError::FetchFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    if !response.ok() {
        return Err(UiError::UnexpectedStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response.json::<T>().await.map_err(|e| UiError::DecodeFailed {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Fetch the public configuration.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// is not a `ClientConfig`.
pub async fn fetch_client_config() -> Result<ClientConfig> {
    fetch_json(api::CONFIG).await
}

/// Fetch the session view for the current visitor.
///
/// The browser attaches the provider cookie because the call is same-origin.
///
/// # Errors
///
/// Returns an error if the request fails or the server reports the lookup as
/// failed (502).
pub async fn fetch_session_view(endpoint: &str) -> Result<SessionView> {
    fetch_json(endpoint).await
}
