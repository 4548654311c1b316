//! Light / dark / system switcher.

use leptos::prelude::*;
use plantventory_core::Theme;

use crate::components::IconGlyph;
use crate::error::log_error;
use crate::state::cycle_theme;

/// Cycles the theme on click and saves the choice. Applying the theme to the
/// document is the owner's job, so it holds even while this control is absent.
#[component]
pub fn ThemeToggle(theme: RwSignal<Theme>) -> impl IntoView {
    let on_click = move |_| {
        let (next, stored) = cycle_theme(theme.get_untracked());
        if let Err(e) = stored {
            log_error("store theme", &e);
        }
        theme.set(next);
    };

    view! {
        <button
            type="button"
            class="nav-button theme-toggle"
            title=move || format!("Theme: {}", theme.get())
            on:click=on_click
        >
            {move || view! { <IconGlyph icon=theme.get().icon() /> }}
        </button>
    }
}
