//! Event sink that keeps every event for later assertions.

use std::cell::RefCell;
use std::rc::Rc;
use swipeable_foundation::{ChangeReason, EventSink, SwipeEvent, SwitchReason};

/// Records emitted events. Clones share the same log, so one clone can be
/// handed to a component while the test keeps another.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<SwipeEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SwipeEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn last(&self) -> Option<SwipeEvent> {
        self.events.borrow().last().copied()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Indices reported while switching for `reason`.
    pub fn switching_indices(&self, reason: SwitchReason) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match *event {
                SwipeEvent::Switching { index, reason: r } if r == reason => Some(index),
                _ => None,
            })
            .collect()
    }

    /// `(index, previous, reason)` of every committed change.
    pub fn changes(&self) -> Vec<(usize, usize, ChangeReason)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match *event {
                SwipeEvent::ChangeIndex {
                    index,
                    previous,
                    reason,
                } => Some((index, previous, reason)),
                _ => None,
            })
            .collect()
    }

    pub fn transition_ends(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, SwipeEvent::TransitionEnd))
            .count()
    }
}

impl EventSink for EventRecorder {
    fn emit(&mut self, event: SwipeEvent) {
        self.events.borrow_mut().push(event);
    }
}
