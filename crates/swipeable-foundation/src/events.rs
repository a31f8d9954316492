//! Events emitted to collaborators.

/// Why an index is being reported while it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchReason {
    /// The pointer moved during a swipe.
    Move,
    /// The gesture ended and an index was committed.
    End,
}

/// What caused a committed index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeReason {
    Swipe,
    Keyboard,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeEvent {
    /// Fractional index while switching slides.
    Switching { index: f32, reason: SwitchReason },
    /// A new integer index was committed.
    ChangeIndex {
        index: usize,
        previous: usize,
        reason: ChangeReason,
    },
    /// The container settled on the committed slide.
    TransitionEnd,
}

/// Receiver for [`SwipeEvent`]s.
///
/// Implemented for every `FnMut(SwipeEvent)` closure.
pub trait EventSink {
    fn emit(&mut self, event: SwipeEvent);
}

impl<F> EventSink for F
where
    F: FnMut(SwipeEvent),
{
    fn emit(&mut self, event: SwipeEvent) {
        self(event)
    }
}
