//! Transition timing for swipeable views
//!
//! Easing curves, the transition spec applied when an index is committed, and
//! a sampler that lets non-CSS renderers animate the slide container.

mod animation;

pub use animation::*;

pub mod prelude {
    pub use crate::animation::{Easing, IndexTransition, TransitionSpec};
}
