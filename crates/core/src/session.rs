//! Session facts and the collaborators that produce them.
//!
//! The identity provider owns sessions; this crate only reads them. A
//! [`SessionResolver`] is the "how do we find out who is signed in" strategy
//! a navigation bar is rendered with, and a [`ProfileLookup`] turns a user id
//! into an optional display-name-bearing record.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::{Result, ResultExt};

/// Identity-provider user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An authenticated session as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "id")]
    pub user_id: UserId,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub primary_email: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            display_name: None,
            primary_email: None,
        }
    }
}

/// The session fact: nobody, or somebody.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(session) => Some(session),
        }
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&UserId> {
        self.session().map(|s| &s.user_id)
    }
}

impl From<Option<Session>> for SessionState {
    fn from(session: Option<Session>) -> Self {
        session.map_or(Self::Anonymous, Self::Authenticated)
    }
}

/// Display-name-bearing profile record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
}

impl Profile {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// The trimmed display name, if there is a non-blank one.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

/// Strategy for answering "is someone signed in, and who".
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// Read the current session. Called once per render.
    ///
    /// # Errors
    ///
    /// Returns `Error::SessionLookupFailed` if the identity provider could not
    /// be asked. No retry happens at this layer.
    async fn resolve(&self) -> Result<SessionState>;
}

/// Looks up a profile for an optional user.
#[async_trait]
pub trait ProfileLookup: Send + Sync {
    /// `None` in, `Ok(None)` out.
    ///
    /// # Errors
    ///
    /// Returns `Error::ProfileLookupFailed` if the backing store failed.
    async fn lookup(&self, user: Option<&UserId>) -> Result<Option<Profile>>;
}

/// The purely client-rendered strategy: nobody is ever signed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousResolver;

#[async_trait]
impl SessionResolver for AnonymousResolver {
    async fn resolve(&self) -> Result<SessionState> {
        Ok(SessionState::Anonymous)
    }
}

/// Always resolves to the state it was built with.
#[derive(Debug, Clone, Default)]
pub struct FixedResolver(pub SessionState);

#[async_trait]
impl SessionResolver for FixedResolver {
    async fn resolve(&self) -> Result<SessionState> {
        Ok(self.0.clone())
    }
}

/// Profile directory held in memory, keyed by user id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfiles {
    profiles: HashMap<UserId, Profile>,
}

impl InMemoryProfiles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, user: UserId, profile: Profile) -> Self {
        self.profiles.insert(user, profile);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl FromIterator<(UserId, Profile)> for InMemoryProfiles {
    fn from_iter<I: IntoIterator<Item = (UserId, Profile)>>(iter: I) -> Self {
        Self {
            profiles: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl ProfileLookup for InMemoryProfiles {
    async fn lookup(&self, user: Option<&UserId>) -> Result<Option<Profile>> {
        Ok(user.and_then(|id| self.profiles.get(id)).cloned())
    }
}

/// What a page needs to know about the session, in wire form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub signed_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl SessionView {
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            signed_in: false,
            display_name: None,
        }
    }

    /// Combine a session fact with the profile looked up for it.
    ///
    /// A profile is ignored for anonymous sessions; a blank name counts as no name.
    #[must_use]
    pub fn from_parts(state: &SessionState, profile: Option<&Profile>) -> Self {
        let signed_in = state.is_signed_in();
        Self {
            signed_in,
            display_name: profile
                .filter(|_| signed_in)
                .and_then(Profile::display_name)
                .map(str::to_string),
        }
    }
}

/// One session read followed by one profile lookup.
///
/// The lookup always runs, with `None` for anonymous sessions. Failures of
/// either collaborator are logged and propagated unchanged.
///
/// # Errors
///
/// Returns whatever error the resolver or the lookup returned.
pub async fn resolve_session(
    sessions: &dyn SessionResolver,
    profiles: &dyn ProfileLookup,
) -> Result<SessionView> {
    let state = sessions
        .resolve()
        .await
        .inspect_error(|e| tracing::warn!("session resolution failed: {}", e))?;

    let profile = profiles
        .lookup(state.user_id())
        .await
        .inspect_error(|e| tracing::warn!("profile lookup failed: {}", e))?;

    tracing::debug!(
        signed_in = state.is_signed_in(),
        has_profile = profile.is_some(),
        "session resolved"
    );

    Ok(SessionView::from_parts(&state, profile.as_ref()))
}
