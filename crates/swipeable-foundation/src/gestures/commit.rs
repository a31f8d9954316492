//! Release policy: which slide a finished swipe settles on.

/// State of the carousel at the moment the pointer is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    /// Fractional index under the pointer.
    pub current: f32,
    /// Last committed index.
    pub latest: usize,
    /// Smoothed primary-axis velocity, positive when dragging backwards.
    pub velocity: f32,
    pub index_max: usize,
}

/// Picks the committed index for a release.
///
/// A flick (`|velocity| > threshold`) moves in the direction of travel. A
/// slow release commits once the displacement from `latest` exceeds
/// `hysteresis`, and otherwise snaps back. Both comparisons are strict.
pub fn commit_target(release: Release, threshold: f32, hysteresis: f32) -> usize {
    let Release {
        current,
        latest,
        velocity,
        index_max,
    } = release;
    let delta = latest as f32 - current;

    let target = if velocity.abs() > threshold {
        if velocity > 0.0 {
            current.floor()
        } else {
            current.ceil()
        }
    } else if delta.abs() > hysteresis {
        if delta > 0.0 {
            current.floor()
        } else {
            current.ceil()
        }
    } else {
        latest as f32
    };

    target.clamp(0.0, index_max as f32) as usize
}
