//! Main application component
//!
//! Fetches the public configuration once, then renders the navigation bar
//! and the routed pages with it. The shell owns the theme: it is applied to
//! the document whatever state the navigation bar is in.

use leptos::prelude::*;
use leptos_router::components::Router;
use plantventory_core::ClientConfig;
use wasm_bindgen_futures::spawn_local;

use crate::components::Navbar;
use crate::error::{UiError, log_error};
use crate::router::AppRoutes;
use crate::state::{SessionSource, apply_theme, fetch_client_config, initial_theme, stored_theme};

/// Root component
#[component]
pub fn App() -> impl IntoView {
    // A saved choice holds even if the configuration never arrives.
    if let Some(saved) = stored_theme() {
        if let Err(e) = apply_theme(saved) {
            log_error("apply theme", &e);
        }
    }

    let (config, set_config) = signal::<Option<Result<ClientConfig, UiError>>>(None);

    spawn_local(async move {
        let result = fetch_client_config().await;
        if let Err(e) = &result {
            log_error("load configuration", e);
        }
        set_config.set(Some(result));
    });

    view! {
        <ErrorBoundary fallback=|_| view! { <StartupFailed /> }>
            {move || config.get().map(|result| result.map(|config| view! { <Shell config /> }))}
        </ErrorBoundary>
    }
}

#[component]
fn Shell(config: ClientConfig) -> impl IntoView {
    let theme = RwSignal::new(initial_theme(config.theme));
    Effect::new(move |_| {
        if let Err(e) = apply_theme(theme.get()) {
            log_error("apply theme", &e);
        }
    });
    let source = SessionSource::from_config(&config);
    let sign_up_href = config.auth.sign_up.clone();

    view! {
        <Router>
            <div class="app-container">
                <Navbar urls=config.auth source theme />
                <main class="app-main">
                    <AppRoutes sign_up_href />
                </main>
            </div>
        </Router>
    }
}

#[component]
fn StartupFailed() -> impl IntoView {
    view! {
        <div class="startup-error" role="alert">
            <h1>"Plantventory is unavailable"</h1>
            <p>"The configuration could not be loaded. Please try again shortly."</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_component_exists() {
        // Compile-time test - if this compiles, the component is valid
        let _component = App;
        let _shell = Shell;
    }
}
