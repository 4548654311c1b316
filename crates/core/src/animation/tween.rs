//! Declarative animation programs.
//!
//! A [`Tween`] describes *what* should move: which class it selects, the
//! property states it moves between and how time maps onto them. It holds no
//! targets and no clock; [`super::AnimationContext`] binds it to elements.

use super::ease::Ease;
use super::props::{FieldMask, PropsPatch};

/// How many times a program plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Repeat {
    /// Play once and hold the terminal state.
    #[default]
    Once,
    /// Play until cancelled.
    Forever,
}

/// Sampled position of one target within a program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Eased progress between start (0) and end (1).
    pub progress: f64,
    /// The target has reached its terminal state and will not move again.
    pub complete: bool,
}

/// An animation program bound to a class selector.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    selector: String,
    from: Option<PropsPatch>,
    to: PropsPatch,
    duration: f64,
    delay: f64,
    stagger: f64,
    ease: Ease,
    repeat: Repeat,
    yoyo: bool,
}

impl Tween {
    const DEFAULT_DURATION: f64 = 0.5;

    /// Animate matched targets from their current state to `to`.
    #[must_use]
    pub fn to(selector: impl Into<String>, to: PropsPatch) -> Self {
        Self {
            selector: selector.into(),
            from: None,
            to,
            duration: Self::DEFAULT_DURATION,
            delay: 0.0,
            stagger: 0.0,
            ease: Ease::Linear,
            repeat: Repeat::Once,
            yoyo: false,
        }
    }

    /// Animate matched targets from `from` to `to`. The `from` state is
    /// applied as soon as the program is registered.
    #[must_use]
    pub fn from_to(selector: impl Into<String>, from: PropsPatch, to: PropsPatch) -> Self {
        Self {
            from: Some(from),
            ..Self::to(selector, to)
        }
    }

    /// Duration of a single cycle, in seconds.
    #[must_use]
    pub const fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    /// Delay before the first target starts, in seconds.
    #[must_use]
    pub const fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    /// Extra start offset per target, in document order.
    #[must_use]
    pub const fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = seconds;
        self
    }

    #[must_use]
    pub const fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    #[must_use]
    pub const fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Reverse direction on every other cycle instead of jumping back to the start.
    #[must_use]
    pub const fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    #[must_use]
    pub const fn from_patch(&self) -> Option<&PropsPatch> {
        self.from.as_ref()
    }

    #[must_use]
    pub const fn to_patch(&self) -> &PropsPatch {
        &self.to
    }

    #[must_use]
    pub const fn repeats(&self) -> Repeat {
        self.repeat
    }

    #[must_use]
    pub const fn is_yoyo(&self) -> bool {
        self.yoyo
    }

    /// Fields this program writes.
    #[must_use]
    pub fn mask(&self) -> FieldMask {
        self.from
            .map_or_else(FieldMask::default, |from| from.mask())
            .union(self.to.mask())
    }

    /// Time at which the target at `index` finishes, or `None` for endless programs.
    #[must_use]
    pub fn end_time(&self, index: usize) -> Option<f64> {
        match self.repeat {
            Repeat::Once => Some(self.start_offset(index) + self.duration.max(0.0)),
            Repeat::Forever => None,
        }
    }

    fn start_offset(&self, index: usize) -> f64 {
        self.delay + self.stagger * index as f64
    }

    /// Sample the program for the target at `index`, `elapsed` seconds after registration.
    #[must_use]
    pub fn sample(&self, elapsed: f64, index: usize) -> Sample {
        let local = elapsed - self.start_offset(index);
        if local < 0.0 {
            return Sample {
                progress: self.ease.apply(0.0),
                complete: false,
            };
        }

        if self.duration <= 0.0 {
            return Sample {
                progress: 1.0,
                complete: self.repeat == Repeat::Once,
            };
        }

        let cycles = local / self.duration;
        match self.repeat {
            Repeat::Once => Sample {
                progress: self.ease.apply(cycles.min(1.0)),
                complete: cycles >= 1.0,
            },
            Repeat::Forever => {
                let cycle = cycles.floor();
                let fraction = cycles - cycle;
                let reversed = self.yoyo && (cycle as u64) % 2 == 1;
                let raw = if reversed { 1.0 - fraction } else { fraction };
                Sample {
                    progress: self.ease.apply(raw),
                    complete: false,
                }
            }
        }
    }
}
