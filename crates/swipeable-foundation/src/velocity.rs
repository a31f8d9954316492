//! Velocity estimation for swipe release decisions.

use crate::gesture_constants::VELOCITY_SMOOTHING;

/// Single-pole low-pass filter over per-event primary-axis deltas.
///
/// The estimate is in pixels per move event, not per second: input sources
/// deliver moves at roughly frame rate, and the flick threshold is expressed
/// in the same unit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VelocityFilter {
    value: f32,
}

impl VelocityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds in the delta since the previous move and returns the estimate.
    pub fn add_delta(&mut self, delta: f32) -> f32 {
        self.value = self.value * VELOCITY_SMOOTHING + delta * (1.0 - VELOCITY_SMOOTHING);
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}
