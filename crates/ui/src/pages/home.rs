//! Home page component

use leptos::prelude::*;

use crate::components::Hero;

/// Landing page: the hero and its calls to action
#[component]
pub fn Home(#[prop(into)] sign_up_href: String) -> impl IntoView {
    view! {
        <div class="home-page">
            <Hero sign_up_href />
        </div>
    }
}
