//! In-memory targets for exercising animation contexts without a DOM.

use std::cell::RefCell;
use std::rc::Rc;

use super::context::{AnimationTarget, TargetScope};
use super::props::Props;

#[derive(Debug, Default)]
struct TargetLog {
    inline: Option<String>,
    renders: Vec<Props>,
    restores: usize,
}

/// A target that records every write and restore.
#[derive(Debug, Clone)]
pub struct RecordingTarget {
    id: usize,
    log: Rc<RefCell<TargetLog>>,
}

impl PartialEq for RecordingTarget {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl RecordingTarget {
    pub fn render_count(&self) -> usize {
        self.log.borrow().renders.len()
    }

    pub fn last_render(&self) -> Option<Props> {
        self.log.borrow().renders.last().copied()
    }

    pub fn restore_count(&self) -> usize {
        self.log.borrow().restores
    }

    pub fn inline_style(&self) -> Option<String> {
        self.log.borrow().inline.clone()
    }
}

impl AnimationTarget for RecordingTarget {
    type Saved = Option<String>;

    fn capture(&self) -> Self::Saved {
        self.log.borrow().inline.clone()
    }

    fn restore(&self, saved: Self::Saved) {
        let mut log = self.log.borrow_mut();
        log.inline = saved;
        log.restores += 1;
    }

    fn render(&self, props: &Props) {
        let mut log = self.log.borrow_mut();
        log.inline = Some(props.to_css());
        log.renders.push(*props);
    }
}

/// A flat list of classed elements standing in for a component subtree.
#[derive(Debug, Default)]
pub struct FakeScope {
    elements: Vec<(Vec<&'static str>, RecordingTarget)>,
}

impl FakeScope {
    /// Add an element with no inline style.
    pub fn element(&mut self, classes: &[&'static str]) -> RecordingTarget {
        self.push(classes, None)
    }

    /// Add an element carrying an inline style before any animation runs.
    pub fn element_with_style(&mut self, classes: &[&'static str], style: &str) -> RecordingTarget {
        self.push(classes, Some(style.to_string()))
    }

    fn push(&mut self, classes: &[&'static str], inline: Option<String>) -> RecordingTarget {
        let target = RecordingTarget {
            id: self.elements.len(),
            log: Rc::new(RefCell::new(TargetLog {
                inline,
                ..TargetLog::default()
            })),
        };
        self.elements.push((classes.to_vec(), target.clone()));
        target
    }
}

impl TargetScope for FakeScope {
    type Target = RecordingTarget;

    fn select(&self, class_name: &str) -> Vec<Self::Target> {
        self.elements
            .iter()
            .filter(|(classes, _)| classes.contains(&class_name))
            .map(|(_, target)| target.clone())
            .collect()
    }
}
