//! Plants page component

use leptos::prelude::*;
use leptos_router::components::A;
use plantventory_core::routes;

/// Destination of the primary call to action
#[component]
pub fn Plants() -> impl IntoView {
    view! {
        <div class="plants-page">
            <h1>"Your plants"</h1>
            <p>"Nothing here yet. Your inventory will show up on this page."</p>
            <A href=routes::HOME>"Back to Home"</A>
        </div>
    }
}
