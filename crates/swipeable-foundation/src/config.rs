//! Per-instance configuration of a swipeable view.

use crate::gesture_constants::{DEFAULT_FLICK_THRESHOLD, DEFAULT_HYSTERESIS, UNCERTAINTY_THRESHOLD};
use swipeable_animation::TransitionSpec;
use swipeable_geometry::SwipeAxis;

/// Configuration of one carousel instance.
///
/// Built once and treated as immutable by the engine; use the `with_*`
/// builders to derive variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    pub axis: SwipeAxis,
    /// Damp overdrag past the first/last slide instead of stopping hard.
    pub resistance: bool,
    /// Fractional displacement needed to commit without a flick.
    pub hysteresis: f32,
    /// Smoothed velocity above which a release counts as a quick flick.
    pub threshold: f32,
    /// Never yield the gesture to nested native scrollers.
    pub ignore_native_scroll: bool,
    /// Let mouse drags drive the same state machine as touch.
    pub enable_mouse_events: bool,
    /// Mount every slide from the first frame.
    pub disable_lazy_loading: bool,
    /// Animate committed index changes.
    pub animate_transitions: bool,
    /// Ignore gesture input entirely.
    pub disabled: bool,
    pub spring_config: TransitionSpec,
    /// Pixels of travel before a drag is classified.
    pub uncertainty_threshold: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            axis: SwipeAxis::X,
            resistance: false,
            hysteresis: DEFAULT_HYSTERESIS,
            threshold: DEFAULT_FLICK_THRESHOLD,
            ignore_native_scroll: false,
            enable_mouse_events: false,
            disable_lazy_loading: false,
            animate_transitions: true,
            disabled: false,
            spring_config: TransitionSpec::default(),
            uncertainty_threshold: UNCERTAINTY_THRESHOLD,
        }
    }
}

impl SwipeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_axis(mut self, axis: SwipeAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_resistance(mut self, resistance: bool) -> Self {
        self.resistance = resistance;
        self
    }

    pub fn with_hysteresis(mut self, hysteresis: f32) -> Self {
        self.hysteresis = hysteresis;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_ignore_native_scroll(mut self, ignore: bool) -> Self {
        self.ignore_native_scroll = ignore;
        self
    }

    pub fn with_mouse_events(mut self, enabled: bool) -> Self {
        self.enable_mouse_events = enabled;
        self
    }

    pub fn with_lazy_loading_disabled(mut self, disabled: bool) -> Self {
        self.disable_lazy_loading = disabled;
        self
    }

    pub fn with_animate_transitions(mut self, animate: bool) -> Self {
        self.animate_transitions = animate;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_spring_config(mut self, spec: TransitionSpec) -> Self {
        self.spring_config = spec;
        self
    }

    pub fn with_uncertainty_threshold(mut self, pixels: f32) -> Self {
        self.uncertainty_threshold = pixels;
        self
    }

    /// Replaces non-finite or negative thresholds with their defaults.
    pub fn sanitized(mut self) -> Self {
        if !self.hysteresis.is_finite() || self.hysteresis < 0.0 {
            log::warn!(
                "swipeable: invalid hysteresis {}, using {}",
                self.hysteresis,
                DEFAULT_HYSTERESIS
            );
            self.hysteresis = DEFAULT_HYSTERESIS;
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            log::warn!(
                "swipeable: invalid flick threshold {}, using {}",
                self.threshold,
                DEFAULT_FLICK_THRESHOLD
            );
            self.threshold = DEFAULT_FLICK_THRESHOLD;
        }
        if !self.uncertainty_threshold.is_finite() || self.uncertainty_threshold < 0.0 {
            log::warn!(
                "swipeable: invalid uncertainty threshold {}, using {}",
                self.uncertainty_threshold,
                UNCERTAINTY_THRESHOLD
            );
            self.uncertainty_threshold = UNCERTAINTY_THRESHOLD;
        }
        self
    }
}
