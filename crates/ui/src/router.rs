//! Route table for the Plantventory UI
//!
//! Paths come from `plantventory_core::routes`, shared with the server's
//! SPA fallback.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Routes},
};

use crate::pages::{Home, NotFound, Plants};

/// Page routes. Must be rendered inside a `Router`.
#[component]
pub fn AppRoutes(#[prop(into)] sign_up_href: String) -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route
                path=StaticSegment("")
                view=move || view! { <Home sign_up_href=sign_up_href.clone() /> }
            />
            <Route path=StaticSegment("plants") view=Plants />
        </Routes>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_routes_component_exists() {
        let _component = AppRoutes;
    }
}
