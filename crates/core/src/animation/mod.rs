//! Deterministic animation engine.
//!
//! - `props`: animatable properties and partial patches
//! - `ease`: easing curves
//! - `tween`: declarative programs (selector, states, timing, repetition)
//! - `context`: the scoped, revertible registry that binds programs to targets
//!
//! Hosts implement [`TargetScope`] and [`AnimationTarget`] for their element
//! type and drive [`AnimationContext::tick`] from their frame loop.

pub mod context;
pub mod ease;
pub mod props;
pub mod tween;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{AnimationContext, AnimationTarget, ProgramId, TargetScope};
pub use ease::Ease;
pub use props::{FieldMask, Props, PropsPatch};
pub use tween::{Repeat, Sample, Tween};
