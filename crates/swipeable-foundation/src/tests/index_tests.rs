use super::*;

fn params(start_index: f32, start: f32, current: f32, resistance: bool) -> IndexParams {
    IndexParams {
        start_index,
        start_primary: start,
        current_primary: current,
        view_length: 300.0,
        index_max: 2.0,
        resistance,
    }
}

#[test]
fn drag_inside_range_is_linear() {
    let result = compute_index(params(0.0, 300.0, 60.0, false));
    assert!((result.index - 0.8).abs() < 1e-6, "index {}", result.index);
    assert_eq!(result.corrected_start, None);

    let result = compute_index(params(1.0, 100.0, 160.0, true));
    assert!((result.index - 0.8).abs() < 1e-6, "index {}", result.index);
}

#[test]
fn computation_is_deterministic() {
    for resistance in [false, true] {
        let p = params(1.0, 12.0, -850.0, resistance);
        let first = compute_index(p);
        for _ in 0..10 {
            assert_eq!(compute_index(p), first);
        }
    }
}

#[test]
fn without_resistance_index_stays_in_range() {
    for step in -40..=40 {
        let current = step as f32 * 37.5;
        for start_index in [0.0, 0.5, 1.0, 2.0] {
            let result = compute_index(params(start_index, 0.0, current, false));
            assert!(
                (0.0..=2.0).contains(&result.index),
                "start {start_index} current {current} -> {}",
                result.index
            );
        }
    }
}

#[test]
fn clamp_corrects_start_so_reversal_resumes_at_edge() {
    // At index 0, dragging right by 90px would go to -0.3.
    let result = compute_index(params(0.0, 100.0, 190.0, false));
    assert_eq!(result.index, 0.0);
    let corrected = result.corrected_start.expect("clamped drag corrects start");
    assert_eq!(corrected, 190.0);

    // Reversing by 30px from there moves immediately off the edge.
    let resumed = compute_index(params(0.0, corrected, 160.0, false));
    assert!((resumed.index - 0.1).abs() < 1e-6, "index {}", resumed.index);
}

#[test]
fn clamp_at_upper_edge() {
    let result = compute_index(params(2.0, 300.0, 0.0, false));
    assert_eq!(result.index, 2.0);
    assert_eq!(result.corrected_start, Some(0.0));
}

#[test]
fn resistance_damps_below_zero() {
    let mut previous = 0.0;
    for viewports in 1..=20 {
        let current = 300.0 * viewports as f32;
        let result = compute_index(params(0.0, 0.0, current, true));
        assert!(result.index > -1.0, "{viewports} viewports -> {}", result.index);
        assert!(result.index < previous, "damping must keep moving");
        previous = result.index;
    }
}

#[test]
fn resistance_never_reaches_its_asymptote() {
    for viewports in [30.0, 200.0, 1e4, 1e7] {
        let below = compute_index(params(0.0, 0.0, 300.0 * viewports, true));
        assert!(below.index > -1.0, "{viewports} viewports -> {}", below.index);
        assert!(below.index < -0.99, "{viewports} viewports -> {}", below.index);

        let above = compute_index(params(2.0, 0.0, -300.0 * viewports, true));
        assert!(above.index < 3.0, "{viewports} viewports -> {}", above.index);
        assert!(above.index > 2.99, "{viewports} viewports -> {}", above.index);
    }
}

#[test]
fn resistance_full_viewport_is_about_45_percent() {
    let result = compute_index(params(0.0, 0.0, 300.0, true));
    let expected = (-0.6f32).exp() - 1.0;
    assert!((result.index - expected).abs() < 1e-6);
    assert!((result.index + 0.45).abs() < 0.01, "index {}", result.index);
}

#[test]
fn resistance_damps_above_max() {
    for viewports in 1..=20 {
        let current = -300.0 * viewports as f32;
        let result = compute_index(params(2.0, 0.0, current, true));
        assert!(result.index > 2.0 && result.index < 3.0, "-> {}", result.index);
    }
}

#[test]
fn resistance_is_continuous_at_edges() {
    let at_zero = compute_index(params(0.0, 0.0, 0.0, true));
    assert_eq!(at_zero.index, 0.0);
    let at_max = compute_index(params(2.0, 0.0, 0.0, true));
    assert_eq!(at_max.index, 2.0);
}

#[test]
fn degenerate_view_length_is_rejected() {
    for length in [0.0, -10.0, f32::NAN, f32::INFINITY] {
        let mut p = params(0.0, 0.0, 10.0, false);
        p.view_length = length;
        assert!(matches!(
            try_compute_index(p),
            Err(IndexError::InvalidViewLength(_))
        ));
    }
    assert!(try_compute_index(params(0.0, 0.0, 10.0, false)).is_ok());
}
