use super::*;
use std::cell::Cell;

const SLOP: f32 = 10.0;

fn allowed() -> bool {
    true
}

fn denied() -> bool {
    false
}

#[test]
fn down_records_start_without_claiming() {
    let mut gesture = OverscrollDragGesture::new(SLOP);

    let update = gesture.on_event(PointerEventKind::Down, 100.0, allowed);

    assert_eq!(update, GestureUpdate::Pressed { x: 100.0 });
    assert!(!update.is_claimed());
    assert_eq!(gesture.drag_start_x(), Some(100.0));
    assert!(!gesture.is_dragging());
}

#[test]
fn moves_within_slop_never_start_a_drag() {
    let mut gesture = OverscrollDragGesture::new(SLOP);
    gesture.on_event(PointerEventKind::Down, 100.0, allowed);

    for x in [95.0, 90.0, 105.0, 110.0, 91.0] {
        assert_eq!(
            gesture.on_event(PointerEventKind::Move, x, allowed),
            GestureUpdate::Ignored
        );
    }
    assert_eq!(
        gesture.on_event(PointerEventKind::Up, 91.0, allowed),
        GestureUpdate::Ignored
    );
    assert!(!gesture.is_dragging());
}

#[test]
fn leftward_move_past_slop_starts_drag_once() {
    let mut gesture = OverscrollDragGesture::new(SLOP);
    let queries = Cell::new(0);
    let query = || {
        queries.set(queries.get() + 1);
        true
    };
    gesture.on_event(PointerEventKind::Down, 100.0, query);

    assert_eq!(
        gesture.on_event(PointerEventKind::Move, 95.0, query),
        GestureUpdate::Ignored
    );
    assert_eq!(
        gesture.on_event(PointerEventKind::Move, 80.0, query),
        GestureUpdate::DragStarted { offset: -20.0 }
    );
    assert_eq!(
        gesture.on_event(PointerEventKind::Move, 70.0, query),
        GestureUpdate::Dragged { offset: -30.0 }
    );
    assert_eq!(
        gesture.on_event(PointerEventKind::Move, 120.0, query),
        GestureUpdate::Dragged { offset: 20.0 }
    );
    assert_eq!(queries.get(), 1);
}

#[test]
fn rightward_move_past_slop_is_ignored() {
    let mut gesture = OverscrollDragGesture::new(SLOP);
    gesture.on_event(PointerEventKind::Down, 100.0, allowed);

    assert_eq!(
        gesture.on_event(PointerEventKind::Move, 150.0, allowed),
        GestureUpdate::Ignored
    );
    assert!(!gesture.is_dragging());
}

#[test]
fn leftward_crossing_after_rightward_wander_starts_drag() {
    let mut gesture = OverscrollDragGesture::new(SLOP);
    gesture.on_event(PointerEventKind::Down, 100.0, allowed);

    assert_eq!(
        gesture.on_event(PointerEventKind::Move, 115.0, allowed),
        GestureUpdate::Ignored
    );
    assert_eq!(
        gesture.on_event(PointerEventKind::Move, 80.0, allowed),
        GestureUpdate::DragStarted { offset: -20.0 }
    );
    assert!(gesture.is_dragging());
}

#[test]
fn denied_policy_never_starts_a_drag() {
    let mut gesture = OverscrollDragGesture::new(SLOP);
    gesture.on_event(PointerEventKind::Down, 100.0, denied);

    for x in [50.0, 0.0, -300.0] {
        assert_eq!(
            gesture.on_event(PointerEventKind::Move, x, denied),
            GestureUpdate::Ignored
        );
    }
    assert!(!gesture.is_dragging());
}

#[test]
fn decision_is_made_once_per_gesture() {
    let mut gesture = OverscrollDragGesture::new(SLOP);
    let permitted = Cell::new(false);
    gesture.on_event(PointerEventKind::Down, 100.0, || permitted.get());

    gesture.on_event(PointerEventKind::Move, 80.0, || permitted.get());
    permitted.set(true);

    assert_eq!(
        gesture.on_event(PointerEventKind::Move, 60.0, || permitted.get()),
        GestureUpdate::Ignored
    );

    gesture.on_event(PointerEventKind::Up, 60.0, || permitted.get());
    gesture.on_event(PointerEventKind::Down, 100.0, || permitted.get());
    assert_eq!(
        gesture.on_event(PointerEventKind::Move, 80.0, || permitted.get()),
        GestureUpdate::DragStarted { offset: -20.0 }
    );
}

#[test]
fn policy_is_not_queried_within_slop() {
    let mut gesture = OverscrollDragGesture::new(SLOP);
    gesture.on_event(PointerEventKind::Down, 100.0, || -> bool { unreachable!() });

    let update = gesture.on_event(PointerEventKind::Move, 90.0, || -> bool { unreachable!() });

    assert_eq!(update, GestureUpdate::Ignored);
}

#[test]
fn up_releases_with_offset_from_event() {
    let mut gesture = OverscrollDragGesture::new(SLOP);
    gesture.on_event(PointerEventKind::Down, 100.0, allowed);
    gesture.on_event(PointerEventKind::Move, 80.0, allowed);

    let update = gesture.on_event(PointerEventKind::Up, 70.0, allowed);

    assert_eq!(update, GestureUpdate::Released { offset: -30.0 });
    assert!(!gesture.is_dragging());
    assert_eq!(gesture.drag_start_x(), None);
}

#[test]
fn cancel_releases_with_last_tracked_offset() {
    let mut gesture = OverscrollDragGesture::new(SLOP);
    gesture.on_event(PointerEventKind::Down, 100.0, allowed);
    gesture.on_event(PointerEventKind::Move, 75.0, allowed);

    let update = gesture.on_event(PointerEventKind::Cancel, 0.0, allowed);

    assert_eq!(update, GestureUpdate::Released { offset: -25.0 });
}

#[test]
fn move_without_down_degrades_to_not_dragging() {
    let mut gesture = OverscrollDragGesture::new(SLOP);

    assert_eq!(
        gesture.on_event(PointerEventKind::Move, -500.0, allowed),
        GestureUpdate::Ignored
    );
    assert_eq!(
        gesture.on_event(PointerEventKind::Up, -500.0, allowed),
        GestureUpdate::Ignored
    );
    assert!(!gesture.is_dragging());
}

#[test]
fn second_down_restarts_gesture() {
    let mut gesture = OverscrollDragGesture::new(SLOP);
    gesture.on_event(PointerEventKind::Down, 100.0, allowed);
    gesture.on_event(PointerEventKind::Move, 50.0, allowed);

    gesture.on_event(PointerEventKind::Down, 200.0, allowed);

    assert!(!gesture.is_dragging());
    assert_eq!(
        gesture.on_event(PointerEventKind::Move, 195.0, allowed),
        GestureUpdate::Ignored
    );
}

#[test]
fn exactly_slop_distance_is_not_a_drag() {
    let mut gesture = OverscrollDragGesture::new(SLOP);
    gesture.on_event(PointerEventKind::Down, 100.0, allowed);

    assert_eq!(
        gesture.on_event(PointerEventKind::Move, 90.0, allowed),
        GestureUpdate::Ignored
    );
}
