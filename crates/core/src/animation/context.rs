//! Scoped animation context.
//!
//! An [`AnimationContext`] is bound to one root (a [`TargetScope`]). Every
//! program registered through it resolves its selector inside that root only,
//! and the context owns every handle it creates: [`AnimationContext::revert`]
//! cancels all programs and puts each touched target back to the inline state
//! captured before the first write. Dropping the context reverts it.
//!
//! The context has no clock of its own. The host advances it with
//! [`AnimationContext::tick`], normally once per display frame.

use tracing::{debug, warn};

use super::props::{FieldMask, Props};
use super::tween::{Repeat, Tween};

/// Something an animation program can write to.
///
/// Identity is `PartialEq`: two handles that compare equal are the same
/// element, and share one captured state.
pub trait AnimationTarget: PartialEq {
    /// Inline state captured before the first write.
    type Saved;

    /// Capture the inline state the target has before any animation touches it.
    fn capture(&self) -> Self::Saved;

    /// Put back a state produced by [`AnimationTarget::capture`].
    fn restore(&self, saved: Self::Saved);

    /// Write a property set to the target.
    fn render(&self, props: &Props);
}

/// Resolves class selectors to targets within one root.
pub trait TargetScope {
    type Target: AnimationTarget;

    /// All targets carrying `class_name`, in document order.
    fn select(&self, class_name: &str) -> Vec<Self::Target>;
}

/// Handle to a program registered in a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgramId(u32);

struct Slot<T: AnimationTarget> {
    target: T,
    saved: T::Saved,
    current: Props,
    dirty: bool,
}

#[derive(Debug, Clone, Copy)]
struct Binding {
    slot: usize,
    index: usize,
    start: Props,
    end: Props,
}

struct Program {
    id: ProgramId,
    tween: Tween,
    mask: FieldMask,
    started_at: f64,
    bindings: Vec<Binding>,
    finished: bool,
}

/// A lifetime-bound registry of animation programs, reverted as a unit.
pub struct AnimationContext<S: TargetScope> {
    scope: S,
    slots: Vec<Slot<S::Target>>,
    programs: Vec<Program>,
    elapsed: f64,
    next_id: u32,
    reverted: bool,
}

impl<S: TargetScope> AnimationContext<S> {
    #[must_use]
    pub const fn new(scope: S) -> Self {
        Self {
            scope,
            slots: Vec::new(),
            programs: Vec::new(),
            elapsed: 0.0,
            next_id: 0,
            reverted: false,
        }
    }

    /// Register a program and render its first frame.
    ///
    /// Targets are resolved once, now. A selector matching nothing still
    /// registers (and is logged), mirroring how animation libraries treat a
    /// missing target as a warning rather than a failure. Returns `None` once
    /// the context has been reverted.
    pub fn add(&mut self, tween: Tween) -> Option<ProgramId> {
        if self.reverted {
            warn!(
                selector = tween.selector(),
                "ignoring animation added to a reverted context"
            );
            return None;
        }

        let targets = self.scope.select(tween.selector());
        if targets.is_empty() {
            warn!(selector = tween.selector(), "animation target not found");
        }

        let bindings = targets
            .into_iter()
            .enumerate()
            .map(|(index, target)| {
                let slot = self.slot_for(target);
                let current = self.slots.get(slot).map_or(Props::NATURAL, |s| s.current);
                let start = tween
                    .from_patch()
                    .map_or(current, |from| current.patched(from));
                let end = current.patched(tween.to_patch());
                Binding {
                    slot,
                    index,
                    start,
                    end,
                }
            })
            .collect();

        let id = ProgramId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        debug!(
            selector = tween.selector(),
            program = id.0,
            "animation program registered"
        );

        self.programs.push(Program {
            id,
            mask: tween.mask(),
            tween,
            started_at: self.elapsed,
            bindings,
            finished: false,
        });

        if let Some(program) = self.programs.last_mut() {
            render_program(program, &mut self.slots, self.elapsed);
        }
        self.flush();

        Some(id)
    }

    /// Advance the clock by `dt` seconds and write the new frame.
    ///
    /// Returns the number of targets written. After [`Self::revert`] this
    /// writes nothing and returns 0.
    pub fn tick(&mut self, dt: f64) -> usize {
        if self.reverted {
            return 0;
        }
        self.elapsed += dt.max(0.0);

        let elapsed = self.elapsed;
        for program in self.programs.iter_mut().filter(|p| !p.finished) {
            render_program(program, &mut self.slots, elapsed);
        }
        self.flush()
    }

    /// Cancel every program and restore every touched target.
    ///
    /// Idempotent. The context stays reverted: later ticks write nothing and
    /// later `add` calls are ignored.
    pub fn revert(&mut self) {
        if self.reverted {
            return;
        }
        self.reverted = true;

        let cancelled = self.programs.len();
        self.programs.clear();

        let restored = self.slots.len();
        for slot in self.slots.drain(..) {
            slot.target.restore(slot.saved);
        }

        debug!(cancelled, restored, "animation context reverted");
    }

    #[must_use]
    pub const fn is_reverted(&self) -> bool {
        self.reverted
    }

    /// Seconds the context has been ticked for.
    #[must_use]
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Programs currently held by the context, finished ones included.
    #[must_use]
    pub fn registered_programs(&self) -> usize {
        self.programs.len()
    }

    /// Programs that will still write on the next tick.
    #[must_use]
    pub fn active_programs(&self) -> usize {
        self.programs.iter().filter(|p| !p.finished).count()
    }

    /// Whether a program has reached its terminal state. `None` if unknown or cancelled.
    #[must_use]
    pub fn is_finished(&self, id: ProgramId) -> Option<bool> {
        self.programs
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.finished)
    }

    /// Number of distinct targets the context has written to and will restore.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.slots.len()
    }

    fn slot_for(&mut self, target: S::Target) -> usize {
        if let Some(existing) = self.slots.iter().position(|s| s.target == target) {
            return existing;
        }
        let saved = target.capture();
        self.slots.push(Slot {
            target,
            saved,
            current: Props::NATURAL,
            dirty: false,
        });
        self.slots.len().saturating_sub(1)
    }

    fn flush(&mut self) -> usize {
        let mut written = 0;
        for slot in self.slots.iter_mut().filter(|s| s.dirty) {
            slot.target.render(&slot.current);
            slot.dirty = false;
            written += 1;
        }
        written
    }
}

impl<S: TargetScope> Drop for AnimationContext<S> {
    fn drop(&mut self) {
        self.revert();
    }
}

fn render_program<T: AnimationTarget>(program: &mut Program, slots: &mut [Slot<T>], elapsed: f64) {
    let local = elapsed - program.started_at;
    let mut complete = true;

    for binding in &program.bindings {
        let sample = program.tween.sample(local, binding.index);
        complete &= sample.complete;

        if let Some(slot) = slots.get_mut(binding.slot) {
            let frame = Props::lerp(&binding.start, &binding.end, sample.progress);
            slot.current = slot.current.merged(&frame, &program.mask);
            slot.dirty = true;
        }
    }

    if complete && program.tween.repeats() == Repeat::Once {
        program.finished = true;
    }
}
