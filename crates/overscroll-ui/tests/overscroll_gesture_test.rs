//! Gesture classification through the full container.

use overscroll_testing::{OverscrollTestRule, StubPolicy};
use overscroll_ui::{OverscrollState, TouchDisposition};

#[test]
fn moves_within_slop_never_drag_or_offset() {
    let mut rule = OverscrollTestRule::new();

    let dispositions = rule.swipe(100.0, &[95.0, 92.0, 108.0, 110.0, 90.0]);

    assert!(dispositions
        .iter()
        .all(|disposition| *disposition == TouchDisposition::PassThrough));
    assert_eq!(rule.offset(), 0.0);
    assert_eq!(rule.state(), OverscrollState::Idle);
    assert_eq!(rule.policy().queries(), 0);
}

#[test]
fn denied_policy_never_drags_in_either_direction() {
    let mut rule = OverscrollTestRule::with_policy(StubPolicy::new(false));

    rule.swipe(200.0, &[150.0, 20.0, -400.0]);
    rule.swipe(200.0, &[260.0, 600.0]);

    assert_eq!(rule.offset(), 0.0);
    assert!(!rule.runtime().has_frame_callbacks());
}

#[test]
fn drag_starts_exactly_once_per_gesture() {
    let mut rule = OverscrollTestRule::new();

    rule.down(100.0);
    assert_eq!(rule.move_to(85.0), TouchDisposition::Intercept);
    for x in [80.0, 60.0, 40.0, 20.0] {
        assert_eq!(rule.move_to(x), TouchDisposition::Intercept);
    }

    assert_eq!(rule.policy().queries(), 1);
    assert_eq!(rule.state(), OverscrollState::Dragging);
}

#[test]
fn rightward_drag_never_starts_even_when_permitted() {
    let mut rule = OverscrollTestRule::new();

    rule.down(100.0);
    for x in [140.0, 200.0, 111.0] {
        assert_eq!(rule.move_to(x), TouchDisposition::PassThrough);
    }

    assert_eq!(rule.state(), OverscrollState::Idle);
    assert_eq!(rule.offset(), 0.0);
}

#[test]
fn finger_wandering_right_can_still_start_overscroll_leftwards() {
    let mut rule = OverscrollTestRule::new();

    rule.down(100.0);
    assert_eq!(rule.move_to(115.0), TouchDisposition::PassThrough);
    assert_eq!(rule.move_to(80.0), TouchDisposition::Intercept);

    assert_eq!(rule.state(), OverscrollState::Dragging);
    assert_eq!(rule.offset(), -20.0);
    assert_eq!(rule.policy().queries(), 2);

    rule.up(80.0);
    rule.run_until_idle();
    assert_eq!(rule.offset(), 0.0);
}

#[test]
fn offset_tracks_raw_cumulative_distance() {
    let mut rule = OverscrollTestRule::new();
    rule.down(300.0);

    let mut observed = Vec::new();
    for x in [280.0, 250.5, 260.0, 310.0, 100.0] {
        rule.move_to(x);
        observed.push(rule.offset());
    }

    assert_eq!(observed, vec![-20.0, -49.5, -40.0, 10.0, -200.0]);
    assert_eq!(rule.container().scroll_x(), 200);
}

#[test]
fn becoming_at_end_mid_gesture_does_not_start_overscroll() {
    let policy = StubPolicy::new(false);
    let mut rule = OverscrollTestRule::with_policy(policy.clone());

    rule.down(100.0);
    rule.move_to(70.0);
    policy.set_at_end(true);
    assert_eq!(rule.move_to(40.0), TouchDisposition::PassThrough);
    rule.up(40.0);

    rule.down(100.0);
    assert_eq!(rule.move_to(70.0), TouchDisposition::Intercept);
}

#[test]
fn whole_gesture_is_consumed_once_claimed() {
    let mut rule = OverscrollTestRule::new();

    let dispositions = rule.swipe(100.0, &[95.0, 80.0, 90.0, 130.0]);

    assert_eq!(
        dispositions,
        vec![
            TouchDisposition::PassThrough,
            TouchDisposition::PassThrough,
            TouchDisposition::Intercept,
            TouchDisposition::Intercept,
            TouchDisposition::Intercept,
            TouchDisposition::Intercept,
        ]
    );
}

#[test]
fn out_of_order_phases_degrade_to_idle() {
    let mut rule = OverscrollTestRule::new();

    assert_eq!(rule.move_to(10.0), TouchDisposition::PassThrough);
    assert_eq!(rule.up(10.0), TouchDisposition::PassThrough);
    assert_eq!(rule.cancel(10.0), TouchDisposition::PassThrough);
    assert_eq!(rule.move_to(-300.0), TouchDisposition::PassThrough);

    assert_eq!(rule.state(), OverscrollState::Idle);
    assert_eq!(rule.offset(), 0.0);
}
