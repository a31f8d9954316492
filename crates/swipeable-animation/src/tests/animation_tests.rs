use super::*;

#[test]
fn default_spec_matches_swipe_transition() {
    let spec = TransitionSpec::default();
    assert_eq!(spec.duration_millis, 350);
    assert_eq!(spec.delay_millis, 0);
    assert_eq!(
        spec.css_transition("transform"),
        "transform 0.35s cubic-bezier(0.15, 0.3, 0.25, 1) 0s"
    );
}

#[test]
fn instant_transition_renders_as_zero_length() {
    assert_eq!(TransitionSpec::instant().css_transition("all"), "all 0s ease 0s");
}

#[test]
fn builders_override_fields() {
    let spec = TransitionSpec::default()
        .with_duration(500)
        .with_delay(100)
        .with_easing(Easing::EaseOut);
    assert_eq!(spec.total_millis(), 600);
    assert_eq!(spec.css_transition("height"), "height 0.5s ease-out 0.1s");
}

#[test]
fn easing_endpoints_are_fixed() {
    let curves = [
        Easing::LinearEasing,
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowInEasing,
        Easing::SWIPE,
    ];
    for easing in curves {
        assert_eq!(easing.transform(0.0), 0.0, "{easing}");
        assert_eq!(easing.transform(1.0), 1.0, "{easing}");
        let mid = easing.transform(0.5);
        assert!(mid > 0.0 && mid < 1.0, "{easing} mid {mid}");
    }
}

#[test]
fn swipe_easing_is_monotonic() {
    let mut previous = 0.0;
    for step in 1..=20 {
        let value = Easing::SWIPE.transform(step as f32 / 20.0);
        assert!(value >= previous, "step {step}: {value} < {previous}");
        previous = value;
    }
}

#[test]
fn index_transition_reaches_target() {
    let mut transition = IndexTransition::new(0.4, 1.0, TransitionSpec::default());
    assert_eq!(transition.value(), 0.4);
    assert!(!transition.is_finished());

    let halfway = transition.advance(175);
    assert!(halfway > 0.4 && halfway < 1.0, "halfway {halfway}");

    transition.advance(175);
    assert!(transition.is_finished());
    assert_eq!(transition.value(), 1.0);
}

#[test]
fn index_transition_honours_delay() {
    let spec = TransitionSpec::tween(100, Easing::LinearEasing).with_delay(50);
    let mut transition = IndexTransition::new(2.0, 1.0, spec);
    assert_eq!(transition.advance(50), 2.0);
    let value = transition.advance(50);
    assert!((value - 1.5).abs() < 1e-4, "value {value}");
    transition.advance(50);
    assert!(transition.is_finished());
    assert_eq!(transition.target(), 1.0);
}

#[test]
fn zero_length_transition_finishes_immediately() {
    let transition = IndexTransition::new(0.0, 3.0, TransitionSpec::instant());
    assert!(transition.is_finished());
    assert_eq!(transition.value(), 3.0);
}
