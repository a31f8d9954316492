//! Testing utilities and harness for swipeable views

pub mod element_tree;
pub mod recorder;
pub mod robot;
pub mod robot_assertions;

pub use element_tree::*;
pub use recorder::EventRecorder;
pub use robot::*;
pub use robot_assertions::*;

pub mod prelude {
    pub use crate::element_tree::{horizontal_scroller, vertical_scroller, FakeElementTree, NodeId};
    pub use crate::recorder::EventRecorder;
    pub use crate::robot::*;
    pub use crate::robot_assertions::*;
}
