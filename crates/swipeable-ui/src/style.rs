//! Style values a renderer applies to the carousel elements.

use swipeable_animation::TransitionSpec;
use swipeable_geometry::{FlexDirection, SwipeAxis};

/// Transition applied while following the pointer or when animation is off.
pub const NO_TRANSITION: &str = "all 0s ease 0s";

/// Styles of the flex container holding every slide.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerStyle {
    pub flex_direction: FlexDirection,
    /// CSS `transform` placing the displayed slide in view.
    pub transform: String,
    /// CSS `transition` shorthand.
    pub transition: String,
    pub will_change: &'static str,
}

impl ContainerStyle {
    /// `index` is the fractional index to display. `animate` is false while
    /// dragging, when transitions are disabled, or when the same slide stays
    /// on screen.
    pub fn compute(axis: SwipeAxis, index: f32, animate: bool, spec: &TransitionSpec) -> Self {
        let transition = if animate {
            spec.css_transition("transform")
        } else {
            NO_TRANSITION.to_string()
        };
        Self {
            flex_direction: axis.flex_direction(),
            transform: axis.transform_for(index * 100.0),
            transition,
            will_change: "transform",
        }
    }
}

/// Styles of the carousel root: clip slides outside the viewport along the
/// swipe axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootStyle {
    /// `overflow-x` or `overflow-y`.
    pub overflow_property: &'static str,
    pub overflow: &'static str,
}

impl RootStyle {
    pub fn compute(axis: SwipeAxis) -> Self {
        Self {
            overflow_property: axis.overflow_property(),
            overflow: "hidden",
        }
    }
}

/// Rendering decision for one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideStyle {
    /// Render the slide contents at all.
    pub mounted: bool,
    /// Not the committed slide; hide it from assistive technology.
    pub hidden: bool,
}
