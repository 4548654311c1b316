//! Top navigation bar.
//!
//! One component for every deployment: the [`SessionSource`] decides whether
//! a session is ever requested. Until the lookup answers, the right-hand side
//! shows placeholders. A failed lookup renders through the error boundary
//! instead of silently falling back to the anonymous bar.

use leptos::prelude::*;
use leptos_router::components::A;
use plantventory_core::{AuthControl, AuthUrls, Icon, NavModel, SessionView, Theme, routes};
use wasm_bindgen_futures::spawn_local;

use crate::components::{IconGlyph, Skeleton, ThemeToggle, UserButton};
use crate::error::{UiError, log_error};
use crate::state::{SessionSource, fetch_session_view};

#[component]
pub fn Navbar(urls: AuthUrls, source: SessionSource, theme: RwSignal<Theme>) -> impl IntoView {
    let initial = match source {
        SessionSource::Absent => Some(Ok(SessionView::anonymous())),
        SessionSource::Lookup { .. } => None,
    };
    let (session, set_session) = signal::<Option<Result<SessionView, UiError>>>(initial);

    if let SessionSource::Lookup { endpoint } = source {
        spawn_local(async move {
            let result = fetch_session_view(&endpoint).await;
            if let Err(e) = &result {
                log_error("session lookup", e);
            }
            set_session.set(Some(result));
        });
    }

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <ErrorBoundary fallback=|_| view! { <NavUnavailable /> }>
                    {move || match session.get() {
                        None => Ok(view! { <NavPending /> }.into_any()),
                        Some(result) => result.map(|session_view| {
                            let model = NavModel::build(&session_view, &urls);
                            view! { <NavContent model theme /> }.into_any()
                        }),
                    }}
                </ErrorBoundary>
            </div>
        </nav>
    }
}

#[component]
fn Brand(name: &'static str) -> impl IntoView {
    view! {
        <A href=routes::HOME>
            <span class="navbar-brand">
                <IconGlyph icon=Icon::Sprout class="icon-accent" />
                <span>{name}</span>
            </span>
        </A>
    }
}

#[component]
fn NavContent(model: NavModel, theme: RwSignal<Theme>) -> impl IntoView {
    let NavModel {
        brand,
        links,
        greeting,
        display_name,
        auth,
    } = model;

    view! {
        <Brand name=brand />
        {greeting.map(|text| view! { <p class="navbar-greeting">{text}</p> })}
        <div class="navbar-links">
            {links
                .into_iter()
                .map(|link| {
                    view! {
                        <A href=link.href>
                            <span class="nav-button">
                                <IconGlyph icon=link.icon />
                                <span class="nav-label">{link.label}</span>
                            </span>
                        </A>
                    }
                })
                .collect_view()}
            <ThemeToggle theme />
            <AuthControls auth display_name />
        </div>
    }
}

#[component]
fn AuthControls(auth: AuthControl, display_name: Option<String>) -> impl IntoView {
    let label = auth.label();
    let icon = auth.icon();
    let href = auth.href().to_string();
    let account = match auth {
        AuthControl::SignIn { .. } => None,
        AuthControl::SignOut { account_href, .. } => Some(account_href),
    };

    view! {
        <a class="nav-button nav-button-primary" href=href rel="external">
            <IconGlyph icon />
            <span class="nav-label">{label}</span>
        </a>
        {account.map(|href| view! { <UserButton href display_name /> })}
    }
}

#[component]
fn NavPending() -> impl IntoView {
    view! {
        <Brand name=plantventory_core::nav::BRAND />
        <div class="navbar-links">
            <Skeleton class="skeleton-pill" />
            <Skeleton class="skeleton-pill" />
            <Skeleton class="skeleton-circle" />
        </div>
    }
}

#[component]
fn NavUnavailable() -> impl IntoView {
    view! {
        <Brand name=plantventory_core::nav::BRAND />
        <p class="navbar-error" role="alert">"Account service unavailable"</p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_components_exist() {
        let _navbar = Navbar;
        let _content = NavContent;
        let _pending = NavPending;
        let _unavailable = NavUnavailable;
    }
}
