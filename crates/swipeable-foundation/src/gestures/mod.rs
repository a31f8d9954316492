pub mod commit;
pub mod swipe;

pub use commit::{commit_target, Release};
pub use swipe::{GestureContext, GestureController, SwipePhase};
