//! Identity control shown to signed-in visitors.

use leptos::prelude::*;

/// Capital first letter of the display name, or `?` when there is none.
#[must_use]
pub fn user_initial(display_name: Option<&str>) -> String {
    display_name
        .and_then(|name| name.trim().chars().next())
        .map_or_else(|| "?".to_string(), |c| c.to_uppercase().collect())
}

/// Round avatar linking to the provider's account page.
#[component]
pub fn UserButton(#[prop(into)] href: String, display_name: Option<String>) -> impl IntoView {
    let initial = user_initial(display_name.as_deref());
    let title = display_name.unwrap_or_else(|| "Account".to_string());

    view! {
        <a class="user-button" href=href rel="external" title=title aria-label="Account settings">
            {initial}
        </a>
    }
}
