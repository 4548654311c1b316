//! Identity-provider session resolution.
//!
//! The provider owns sessions. The server forwards the visitor's cookie to
//! the configured session endpoint and reads the answer:
//!
//! - `200` with a JSON user (`{"id": ..., "display_name": ...}`): signed in
//! - `401`, `204` or `404`: anonymous
//! - anything else, or a transport failure: `SessionLookupFailed`
//!
//! Requests carrying no cookie are anonymous without a round trip.

use std::time::Duration;

use async_trait::async_trait;
use plantventory_core::{
    AnonymousResolver, Error, FixedResolver, Result, Session, SessionResolver, SessionState,
};
use reqwest::{StatusCode, header};
use url::Url;

/// Upper bound on one session lookup.
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// How the server finds out who is signed in.
#[derive(Debug, Clone)]
pub enum SessionStrategy {
    /// No identity provider configured.
    Anonymous,
    /// Always the same state. Used for previews and tests.
    Fixed(SessionState),
    /// Ask the identity provider, per request.
    Provider { client: reqwest::Client, endpoint: Url },
}

impl SessionStrategy {
    /// Strategy talking to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the endpoint is not an absolute URL
    /// or the HTTP client cannot be built.
    pub fn provider(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::invalid_config("auth.session_endpoint", e.to_string()))?;
        let client = reqwest::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .map_err(|e| Error::invalid_config("auth.session_endpoint", e.to_string()))?;
        Ok(Self::Provider { client, endpoint })
    }

    /// Whether this strategy can ever report a signed-in user.
    #[must_use]
    pub const fn can_authenticate(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    /// Resolver for one request, carrying that request's cookie.
    #[must_use]
    pub fn for_request(&self, cookie: Option<String>) -> Box<dyn SessionResolver> {
        match self {
            Self::Anonymous => Box::new(AnonymousResolver),
            Self::Fixed(state) => Box::new(FixedResolver(state.clone())),
            Self::Provider { client, endpoint } => Box::new(HttpSessionResolver {
                client: client.clone(),
                endpoint: endpoint.clone(),
                cookie,
            }),
        }
    }
}

/// Asks the identity provider about one visitor.
#[derive(Debug, Clone)]
pub struct HttpSessionResolver {
    client: reqwest::Client,
    endpoint: Url,
    cookie: Option<String>,
}

impl HttpSessionResolver {
    #[must_use]
    pub const fn new(client: reqwest::Client, endpoint: Url, cookie: Option<String>) -> Self {
        Self {
            client,
            endpoint,
            cookie,
        }
    }
}

#[async_trait]
impl SessionResolver for HttpSessionResolver {
    async fn resolve(&self) -> Result<SessionState> {
        let Some(cookie) = self.cookie.as_deref() else {
            return Ok(SessionState::Anonymous);
        };

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .header(header::COOKIE, cookie)
            .send()
            .await
            .map_err(|e| Error::session_lookup_failed(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::NO_CONTENT | StatusCode::NOT_FOUND => {
                Ok(SessionState::Anonymous)
            }
            status if status.is_success() => {
                let session: Session = response.json().await.map_err(|e| {
                    Error::session_lookup_failed(format!("malformed user payload: {e}"))
                })?;
                tracing::debug!(user = %session.user_id, "session resolved by identity provider");
                Ok(SessionState::Authenticated(session))
            }
            status => Err(Error::session_lookup_failed(format!(
                "identity provider returned {status}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_provider_rejects_relative_endpoint() {
        let err = SessionStrategy::provider("/api/me").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_only_anonymous_strategy_cannot_authenticate() {
        assert!(!SessionStrategy::Anonymous.can_authenticate());
        assert!(SessionStrategy::Fixed(SessionState::Anonymous).can_authenticate());
        assert!(
            SessionStrategy::provider("https://auth.example.com/me")
                .unwrap()
                .can_authenticate()
        );
    }

    #[tokio::test]
    async fn test_cookieless_request_is_anonymous_without_network() {
        // Port 9 (discard) would fail if a request were attempted.
        let resolver = HttpSessionResolver::new(
            reqwest::Client::new(),
            Url::parse("http://127.0.0.1:9/me").unwrap(),
            None,
        );
        assert_eq!(resolver.resolve().await.unwrap(), SessionState::Anonymous);
    }
}
