//! Assertion utilities for gesture tests

use crate::recorder::EventRecorder;
use swipeable_foundation::ChangeReason;

/// Assert that a value is within `tolerance` of the expected one.
///
/// Fractional indices come out of float arithmetic; compare them with this
/// rather than `assert_eq!`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a collection has an expected count.
pub fn assert_count<T>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: expected {} items, got {}",
        msg,
        expected,
        items.len()
    );
}

/// Assert the sequence of committed indices reported for `reason`.
pub fn assert_changes(recorder: &EventRecorder, reason: ChangeReason, expected: &[usize], msg: &str) {
    let actual: Vec<usize> = recorder
        .changes()
        .into_iter()
        .filter(|(_, _, r)| *r == reason)
        .map(|(index, _, _)| index)
        .collect();
    assert_eq!(actual, expected, "{}: committed indices", msg);
}

/// Assert that nothing was committed.
pub fn assert_no_changes(recorder: &EventRecorder, msg: &str) {
    let changes = recorder.changes();
    assert!(changes.is_empty(), "{}: unexpected changes {:?}", msg, changes);
}
