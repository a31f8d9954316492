//! Fractional index computation for an in-progress drag.

use crate::gesture_constants::RESISTANCE_COEF;
use std::fmt;

/// Inputs of a single index computation, all in axis-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexParams {
    /// Fractional index when the drag (re)started.
    pub start_index: f32,
    /// Primary coordinate the drag is measured from.
    pub start_primary: f32,
    /// Current primary coordinate of the pointer.
    pub current_primary: f32,
    /// Viewport length along the axis, in pixels.
    pub view_length: f32,
    /// Highest valid slide index (`count - 1`).
    pub index_max: f32,
    /// Damp overdrag instead of clamping.
    pub resistance: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexResult {
    pub index: f32,
    /// Replacement start coordinate after a hard clamp, so reversing the drag
    /// resumes from the edge instead of from the overdragged position.
    pub corrected_start: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndexError {
    /// The viewport length is zero, negative or not finite.
    InvalidViewLength(f32),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::InvalidViewLength(length) => {
                write!(f, "view length must be finite and positive, got {length}")
            }
        }
    }
}

impl std::error::Error for IndexError {}

/// Computes the fractional index for the pointer's current position.
///
/// Rejects a degenerate viewport instead of dividing by it.
pub fn try_compute_index(params: IndexParams) -> Result<IndexResult, IndexError> {
    if !params.view_length.is_finite() || params.view_length <= 0.0 {
        return Err(IndexError::InvalidViewLength(params.view_length));
    }
    Ok(compute_index(params))
}

/// Computes the fractional index for the pointer's current position.
///
/// `view_length` must be finite and positive; use [`try_compute_index`] when
/// that is not already guaranteed.
pub fn compute_index(params: IndexParams) -> IndexResult {
    let IndexParams {
        start_index,
        start_primary,
        current_primary,
        view_length,
        index_max,
        resistance,
    } = params;
    debug_assert!(view_length.is_finite() && view_length > 0.0);

    let raw = start_index + (start_primary - current_primary) / view_length;

    if !resistance {
        let clamped = if raw < 0.0 {
            Some(0.0)
        } else if raw > index_max {
            Some(index_max)
        } else {
            None
        };
        return match clamped {
            Some(index) => IndexResult {
                index,
                corrected_start: Some((index - start_index) * view_length + current_primary),
            },
            None => IndexResult {
                index: raw,
                corrected_start: None,
            },
        };
    }

    // Evaluated in f64 and kept strictly inside (-1, index_max + 1): in f32
    // the curve rounds onto its asymptote after a few dozen viewports.
    let coef = f64::from(RESISTANCE_COEF);
    let index = if raw < 0.0 {
        let damped = (f64::from(raw) * coef).exp_m1() as f32;
        damped.max(-1.0 + f32::EPSILON)
    } else if raw > index_max {
        let overshoot = -((f64::from(index_max) - f64::from(raw)) * coef).exp_m1();
        let ceiling = index_max + 1.0;
        ((f64::from(index_max) + overshoot) as f32).min(ceiling - ceiling * f32::EPSILON)
    } else {
        raw
    };

    IndexResult {
        index,
        corrected_start: None,
    }
}

#[cfg(test)]
#[path = "tests/index_tests.rs"]
mod tests;
