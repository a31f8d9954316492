//! Keyboard navigation between slides.

use crate::key_event::{KeyCode, KeyEvent};
use swipeable_geometry::SwipeAxis;

/// Where a navigation key moves the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyNavigation {
    /// Relative move by whole slides.
    Step(isize),
    First,
    Last,
}

impl KeyNavigation {
    /// Resolves the navigation into an index within `[0, count - 1]`.
    pub fn target(self, current: usize, count: usize) -> usize {
        let max = count.saturating_sub(1);
        match self {
            KeyNavigation::Step(step) => current.saturating_add_signed(step).min(max),
            KeyNavigation::First => 0,
            KeyNavigation::Last => max,
        }
    }
}

/// Maps a key press to a navigation along `axis`.
///
/// Only the arrow keys aligned with the axis step; reversed axes swap them.
/// Page keys step by one slide in document order on every axis. Key releases and presses with modifiers are ignored.
pub fn navigation_for(axis: SwipeAxis, event: &KeyEvent) -> Option<KeyNavigation> {
    if !event.is_key_down() || event.modifiers.any() {
        return None;
    }

    let (backward, forward) = if axis.is_horizontal() {
        (KeyCode::ArrowLeft, KeyCode::ArrowRight)
    } else {
        (KeyCode::ArrowUp, KeyCode::ArrowDown)
    };
    let sign = if axis.is_reversed() { -1 } else { 1 };

    match event.key_code {
        code if code == forward => Some(KeyNavigation::Step(sign)),
        code if code == backward => Some(KeyNavigation::Step(-sign)),
        KeyCode::PageDown => Some(KeyNavigation::Step(1)),
        KeyCode::PageUp => Some(KeyNavigation::Step(-1)),
        KeyCode::Home => Some(KeyNavigation::First),
        KeyCode::End => Some(KeyNavigation::Last),
        _ => None,
    }
}
