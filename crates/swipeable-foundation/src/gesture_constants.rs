//! Shared gesture constants for the swipe engine.
//!
//! Distances are in logical pixels, indices are in slides.

/// Distance a pointer must travel along the swipe axis, and further than
/// across it, before a drag is classified as a swipe.
pub const UNCERTAINTY_THRESHOLD: f32 = 3.0;

/// Exponent coefficient of the edge resistance curve.
///
/// A full viewport of overdrag yields `1 - e^-0.6`, roughly 45% of a slide.
pub const RESISTANCE_COEF: f32 = 0.6;

/// Weight of the previous estimate in the velocity low-pass filter.
pub const VELOCITY_SMOOTHING: f32 = 0.5;

/// Default fractional displacement needed to commit to a neighbour slide.
pub const DEFAULT_HYSTERESIS: f32 = 0.6;

/// Default smoothed velocity (pixels per move event) above which a release
/// is treated as a quick flick.
pub const DEFAULT_FLICK_THRESHOLD: f32 = 5.0;
