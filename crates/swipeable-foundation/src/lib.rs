//! Gesture engine for swipeable views
//!
//! Turns pointer, touch and mouse input into a fractional slide index,
//! decides which slide a released drag commits to and arbitrates the gesture
//! against nested native scrollers.

pub mod claim;
pub mod config;
pub mod events;
pub mod gesture_constants;
pub mod gestures;
pub mod index;
pub mod input;
pub mod slides;
pub mod velocity;

pub use claim::*;
pub use config::SwipeConfig;
pub use events::*;
pub use gestures::{commit_target, GestureContext, GestureController, Release, SwipePhase};
pub use index::{compute_index, try_compute_index, IndexError, IndexParams, IndexResult};
pub use input::*;
pub use slides::*;
pub use velocity::VelocityFilter;

pub use swipeable_animation::{Easing, TransitionSpec};
pub use swipeable_geometry::{AxisPoint, Point, ScrollDirection, Size, SwipeAxis};

pub mod prelude {
    pub use crate::claim::{ClaimOwner, ElementTree, NoNestedScroll, ScrollClaim};
    pub use crate::config::SwipeConfig;
    pub use crate::events::{ChangeReason, EventSink, SwipeEvent, SwitchReason};
    pub use crate::gestures::{GestureContext, GestureController, SwipePhase};
    pub use crate::input::{GestureInput, InputSource, MoveResponse, ViewportMetrics};
    pub use crate::slides::{keys_equal, SlideIdentity, SlideSet};
    pub use swipeable_geometry::{Point, Size, SwipeAxis};
}
