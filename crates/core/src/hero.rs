//! Landing hero: content and animation programs.
//!
//! Two independent mechanisms move the hero:
//!
//! 1. Four programs registered in one [`AnimationContext`] on mount (staged
//!    entrance, floating badge, pulsing call to action, rotating background)
//!    and reverted as a unit on unmount.
//! 2. A one-shot reveal of individual blocks expressed as CSS transitions with
//!    fixed delays ([`Reveal`]). It has no timers and needs no cleanup.

use crate::animation::{AnimationContext, Ease, ProgramId, PropsPatch, Repeat, TargetScope, Tween};
use crate::icon::Icon;
use crate::routes;

/// Class names the programs select on.
pub mod selectors {
    /// Entrance group: revealed once, staggered, in document order.
    pub const ENTRANCE: &str = "hero-float";
    pub const BADGE: &str = "hero-badge";
    pub const PULSE: &str = "hero-pulse";
    pub const GRADIENT: &str = "hero-gradient";
}

/// Staggered entrance of every entrance-group element. Runs once.
#[must_use]
pub fn entrance() -> Tween {
    Tween::from_to(
        selectors::ENTRANCE,
        PropsPatch::new().y(30.0).opacity(0.0).scale(0.95),
        PropsPatch::new().y(0.0).opacity(1.0).scale(1.0),
    )
    .duration(1.2)
    .ease(Ease::Power3Out)
    .stagger(0.2)
}

/// Badge floats up and down until cancelled.
#[must_use]
pub fn badge_float() -> Tween {
    Tween::to(selectors::BADGE, PropsPatch::new().y(-8.0))
        .duration(2.0)
        .ease(Ease::SineInOut)
        .repeat(Repeat::Forever)
        .yoyo(true)
}

/// Primary call to action breathes until cancelled.
#[must_use]
pub fn cta_pulse() -> Tween {
    Tween::to(selectors::PULSE, PropsPatch::new().scale(1.05))
        .duration(2.0)
        .ease(Ease::SineInOut)
        .repeat(Repeat::Forever)
        .yoyo(true)
}

/// Background shapes turn continuously, always in the same direction.
#[must_use]
pub fn background_rotation() -> Tween {
    Tween::to(selectors::GRADIENT, PropsPatch::new().rotation(360.0))
        .duration(20.0)
        .ease(Ease::Linear)
        .repeat(Repeat::Forever)
}

/// Program handles of a mounted hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroPrograms {
    pub entrance: ProgramId,
    pub badge: ProgramId,
    pub pulse: ProgramId,
    pub background: ProgramId,
}

/// The hero's animation lifetime: created on mount, reverted on unmount or drop.
pub struct HeroAnimations<S: TargetScope> {
    context: AnimationContext<S>,
    programs: HeroPrograms,
}

impl<S: TargetScope> HeroAnimations<S> {
    /// Register all four programs in a context bound to `root`.
    ///
    /// Without a root nothing is set up and `None` is returned; this is not an error.
    #[must_use]
    pub fn mount(root: Option<S>) -> Option<Self> {
        let Some(scope) = root else {
            tracing::debug!("hero root not attached, skipping animation setup");
            return None;
        };

        let mut context = AnimationContext::new(scope);
        let programs = HeroPrograms {
            entrance: context.add(entrance())?,
            badge: context.add(badge_float())?,
            pulse: context.add(cta_pulse())?,
            background: context.add(background_rotation())?,
        };

        tracing::debug!(
            targets = context.target_count(),
            "hero animations mounted"
        );

        Some(Self { context, programs })
    }

    /// Advance every program by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> usize {
        self.context.tick(dt)
    }

    /// Whether the entrance has reached its terminal state.
    #[must_use]
    pub fn entrance_finished(&self) -> bool {
        self.context
            .is_finished(self.programs.entrance)
            .unwrap_or(false)
    }

    #[must_use]
    pub const fn programs(&self) -> HeroPrograms {
        self.programs
    }

    #[must_use]
    pub const fn context(&self) -> &AnimationContext<S> {
        &self.context
    }

    /// Cancel every program and restore every element.
    pub fn unmount(mut self) {
        self.context.revert();
    }
}

/// Starting pose of a reveal block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealFrom {
    /// Fade in while sliding up by the given number of pixels.
    Below(f64),
    /// Fade in while growing from the given scale.
    Scaled(f64),
}

/// A one-shot CSS transition with a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub delay: f64,
    pub duration: f64,
    pub from: RevealFrom,
}

impl Reveal {
    const SLIDE: RevealFrom = RevealFrom::Below(20.0);
    const DEFAULT_DURATION: f64 = 0.3;

    pub const BADGE: Self = Self::slide(0.2);
    pub const HEADING: Self = Self::slide(0.3);
    pub const DESCRIPTION: Self = Self::slide(0.4);
    pub const ACTIONS: Self = Self::slide(0.5);
    pub const FEATURES: Self = Self::slide(0.6);
    pub const VISUAL_GLOW: Self = Self {
        delay: 0.7,
        duration: 0.8,
        from: RevealFrom::Scaled(0.8),
    };
    pub const VISUAL_MOCK: Self = Self {
        delay: 0.8,
        duration: 0.8,
        from: RevealFrom::Scaled(0.9),
    };

    const fn slide(delay: f64) -> Self {
        Self {
            delay,
            duration: Self::DEFAULT_DURATION,
            from: Self::SLIDE,
        }
    }

    /// Inline style for the block before (`revealed == false`) or after the reveal.
    ///
    /// The transition is declared in both states so flipping `revealed` once
    /// plays it; the browser holds the terminal state with nothing left running.
    #[must_use]
    pub fn style(&self, revealed: bool) -> String {
        let (opacity, transform) = match (revealed, self.from) {
            (true, _) => (1.0, "none".to_string()),
            (false, RevealFrom::Below(px)) => (0.0, format!("translateY({px}px)")),
            (false, RevealFrom::Scaled(scale)) => (0.0, format!("scale({scale})")),
        };
        format!(
            "opacity: {opacity}; transform: {transform}; \
             transition: opacity {d}s ease-out {delay}s, transform {d}s ease-out {delay}s;",
            d = self.duration,
            delay = self.delay,
        )
    }
}

/// A selling point shown under the call to action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::Zap,
        title: "Lightning Fast",
        description: "Optimized performance with motion",
    },
    Feature {
        icon: Icon::Shield,
        title: "Secure",
        description: "Production-grade authentication",
    },
    Feature {
        icon: Icon::Leaf,
        title: "Eco-Friendly",
        description: "Digital plant management",
    },
];

pub const BADGE_TEXT: &str = "Plant care, organized";
pub const HEADING_LEAD: &str = "A chic inventory for your";
pub const HEADING_ACCENT: &str = "plants";
pub const DESCRIPTION: &str = "Track, nurture, and celebrate your green space. Beautiful UI, \
    smooth authentication, and a delightful experience from seed to sprout.";
pub const PRIMARY_CTA: (&str, &str) = ("Explore plants", routes::PLANTS);
pub const SECONDARY_CTA_LABEL: &str = "Create account";
