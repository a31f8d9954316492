//! Swipeable views for renderers
//!
//! Wraps the gesture engine of `swipeable-foundation` into a component that
//! reports container styles, lazy mounting decisions and keyboard
//! navigation.

pub mod key_event;
pub mod keyboard;
pub mod style;
mod views;

pub use key_event::{KeyCode, KeyEvent, KeyEventType, Modifiers};
pub use keyboard::{navigation_for, KeyNavigation};
pub use style::{ContainerStyle, RootStyle, SlideStyle, NO_TRANSITION};
pub use views::SwipeableViews;

pub use swipeable_foundation as foundation;

pub mod prelude {
    pub use crate::key_event::{KeyCode, KeyEvent};
    pub use crate::style::{ContainerStyle, RootStyle};
    pub use crate::views::SwipeableViews;
    pub use swipeable_foundation::prelude::*;
}
