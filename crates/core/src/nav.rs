//! Navigation bar model.
//!
//! One model for every rendering of the bar. Whether the session came from a
//! server-side lookup or is simply absent is decided by the
//! [`SessionResolver`] handed to [`resolve_nav`]; the model only ever sees a
//! [`SessionView`]. The bar has two states, anonymous and authenticated, and
//! never moves between them itself.

use crate::config::AuthUrls;
use crate::icon::Icon;
use crate::result::Result;
use crate::routes;
use crate::session::{ProfileLookup, SessionResolver, SessionView, resolve_session};

/// A static link rendered regardless of session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

/// Session-dependent call to action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthControl {
    SignIn {
        href: String,
    },
    /// Signed in: a sign-out link plus the provider's identity control.
    SignOut {
        href: String,
        account_href: String,
    },
}

impl AuthControl {
    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            Self::SignIn { href } | Self::SignOut { href, .. } => href,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SignIn { .. } => "Sign In",
            Self::SignOut { .. } => "Sign Out",
        }
    }

    #[must_use]
    pub const fn icon(&self) -> Icon {
        match self {
            Self::SignIn { .. } => Icon::LogIn,
            Self::SignOut { .. } => Icon::LogOut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Anonymous,
    Authenticated,
}

/// Everything the navigation bar renders, minus markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavModel {
    pub brand: &'static str,
    pub links: Vec<NavLink>,
    pub greeting: Option<String>,
    pub display_name: Option<String>,
    pub auth: AuthControl,
}

pub const BRAND: &str = "Plantventory";

/// Links shown to everybody, in order.
pub const STATIC_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Home",
        href: routes::HOME,
        icon: Icon::Home,
    },
    NavLink {
        label: "Plants",
        href: routes::PLANTS,
        icon: Icon::Sprout,
    },
];

/// Personalized greeting for a display name.
#[must_use]
pub fn greeting(name: &str) -> String {
    format!("Hello {name} 👋")
}

impl NavModel {
    /// Build the model for a resolved session.
    #[must_use]
    pub fn build(session: &SessionView, urls: &AuthUrls) -> Self {
        let auth = if session.signed_in {
            AuthControl::SignOut {
                href: urls.sign_out.clone(),
                account_href: urls.account.clone(),
            }
        } else {
            AuthControl::SignIn {
                href: urls.sign_in.clone(),
            }
        };

        let display_name = session
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| session.signed_in && !name.is_empty())
            .map(str::to_string);

        Self {
            brand: BRAND,
            links: STATIC_LINKS.to_vec(),
            greeting: display_name.as_deref().map(greeting),
            display_name,
            auth,
        }
    }

    #[must_use]
    pub const fn state(&self) -> NavState {
        match self.auth {
            AuthControl::SignIn { .. } => NavState::Anonymous,
            AuthControl::SignOut { .. } => NavState::Authenticated,
        }
    }

    /// The provider's identity control is shown only to signed-in users.
    #[must_use]
    pub const fn has_identity_widget(&self) -> bool {
        matches!(self.auth, AuthControl::SignOut { .. })
    }
}

/// Resolve the session through the given strategy and build the model.
///
/// # Errors
///
/// Collaborator failures propagate unchanged; nothing is retried or hidden.
pub async fn resolve_nav(
    sessions: &dyn SessionResolver,
    profiles: &dyn ProfileLookup,
    urls: &AuthUrls,
) -> Result<NavModel> {
    let view = resolve_session(sessions, profiles).await?;
    Ok(NavModel::build(&view, urls))
}
