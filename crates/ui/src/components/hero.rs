//! Landing hero.
//!
//! The `hero-*` classes are the animation targets. The reveal wrappers are
//! separate elements so their CSS transitions never fight the animated
//! transforms.

use leptos::html;
use leptos::prelude::*;
use leptos_router::components::A;
use plantventory_core::Icon;
use plantventory_core::hero::{
    BADGE_TEXT, DESCRIPTION, FEATURES, HEADING_ACCENT, HEADING_LEAD, PRIMARY_CTA, Reveal,
    SECONDARY_CTA_LABEL,
};

use crate::animation::HeroRuntime;
use crate::components::{IconGlyph, Skeleton};
use crate::error::log_error;

#[component]
pub fn Hero(#[prop(into)] sign_up_href: String) -> impl IntoView {
    let container = NodeRef::<html::Section>::new();
    let revealed = RwSignal::new(false);
    let runtime = StoredValue::new_local(None::<HeroRuntime>);

    container.on_load(move |root| {
        match HeroRuntime::mount(Some(root.into())) {
            Ok(mounted) => runtime.set_value(mounted),
            Err(e) => log_error("hero animations", &e),
        }
        request_animation_frame(move || revealed.set(true));
    });

    on_cleanup(move || {
        if let Some(Some(mounted)) = runtime.try_update_value(Option::take) {
            mounted.unmount();
        }
    });

    let reveal = move |step: Reveal| move || step.style(revealed.get());
    let (primary_label, primary_href) = PRIMARY_CTA;

    view! {
        <section node_ref=container class="hero">
            <div class="hero-backdrop" aria-hidden="true">
                <div class="hero-gradient hero-gradient-top"></div>
                <div class="hero-gradient hero-gradient-bottom"></div>
                <div class="hero-gradient hero-gradient-center"></div>
            </div>

            <div class="hero-grid">
                <div class="hero-float hero-copy">
                    <div style=reveal(Reveal::BADGE)>
                        <span class="hero-badge">
                            <IconGlyph icon=Icon::Sprout class="icon-accent" />
                            {BADGE_TEXT}
                        </span>
                    </div>

                    <h1 class="hero-title" style=reveal(Reveal::HEADING)>
                        {HEADING_LEAD}
                        " "
                        <span class="hero-title-accent">{HEADING_ACCENT}</span>
                    </h1>

                    <p class="hero-description" style=reveal(Reveal::DESCRIPTION)>
                        {DESCRIPTION}
                    </p>

                    <div class="hero-actions" style=reveal(Reveal::ACTIONS)>
                        <span class="hero-pulse">
                            <A href=primary_href>
                                <span class="button button-primary">
                                    {primary_label}
                                    <IconGlyph icon=Icon::Leaf />
                                </span>
                            </A>
                        </span>
                        <a class="button button-outline" href=sign_up_href rel="external">
                            {SECONDARY_CTA_LABEL}
                        </a>
                    </div>

                    <div class="hero-features" style=reveal(Reveal::FEATURES)>
                        {FEATURES
                            .iter()
                            .map(|feature| {
                                view! {
                                    <div class="hero-feature">
                                        <IconGlyph icon=feature.icon class="icon-accent" />
                                        <div>
                                            <p class="hero-feature-title">{feature.title}</p>
                                            <p class="hero-feature-description">
                                                {feature.description}
                                            </p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="hero-float hero-visual">
                    <div class="hero-visual-glow" style=reveal(Reveal::VISUAL_GLOW)></div>
                    <div class="hero-visual-mock" style=reveal(Reveal::VISUAL_MOCK)>
                        <div class="mock-header">
                            <Skeleton class="skeleton-circle" />
                            <div class="mock-header-lines">
                                <Skeleton class="skeleton-line skeleton-line-wide" />
                                <Skeleton class="skeleton-line" />
                            </div>
                        </div>
                        <div class="mock-rows">
                            <Skeleton class="skeleton-row" />
                            <Skeleton class="skeleton-row" />
                            <Skeleton class="skeleton-row" />
                        </div>
                        <div class="mock-footer">
                            <Skeleton class="skeleton-pill" />
                            <Skeleton class="skeleton-pill" />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_component_exists() {
        let _component = Hero;
    }
}
