use super::*;

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::LinearEasing,
        Easing::EaseOut,
        Easing::FastOutSlowInEasing,
        Easing::LinearOutSlowInEasing,
        Easing::DECELERATE,
        Easing::Decelerate { factor: 2.5 },
    ];

    for easing in easings {
        assert_eq!(easing.transform(0.0), 0.0, "start for {:?}", easing);
        assert_eq!(easing.transform(1.0), 1.0, "end for {:?}", easing);
    }
}

#[test]
fn decelerate_matches_quadratic_ease_out() {
    let easing = Easing::DECELERATE;

    assert!((easing.transform(0.5) - 0.75).abs() < 1e-6);
    assert!((easing.transform(0.25) - 0.4375).abs() < 1e-6);
}

#[test]
fn decelerate_slows_down_over_time() {
    let easing = Easing::DECELERATE;
    let steps: Vec<f32> = (0..=10).map(|i| easing.transform(i as f32 / 10.0)).collect();

    for window in steps.windows(3) {
        let first = window[1] - window[0];
        let second = window[2] - window[1];
        assert!(second <= first + 1e-6, "rate must not increase: {:?}", window);
    }
}

#[test]
fn larger_decelerate_factor_front_loads_motion() {
    let gentle = Easing::Decelerate { factor: 1.0 }.transform(0.3);
    let strong = Easing::Decelerate { factor: 2.0 }.transform(0.3);

    assert!(strong > gentle);
}

#[test]
fn decelerate_clamps_out_of_range_fractions() {
    assert_eq!(Easing::DECELERATE.transform(-0.5), 0.0);
    assert_eq!(Easing::DECELERATE.transform(1.5), 1.0);
}

#[test]
fn animation_spec_default_is_300ms_decelerate() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::DECELERATE);
}

#[test]
fn zero_duration_still_has_positive_nanos() {
    assert_eq!(AnimationSpec::linear(0).duration_nanos(), 1);
}
