use super::*;
use crate::Dp;

#[test]
fn translate_moves_origin_and_keeps_size() {
    let rect = Rect::from_size(Size::new(320.0, 480.0));

    let moved = rect.translate(-30.0, 0.0);

    assert_eq!(moved.origin(), Point::new(-30.0, 0.0));
    assert_eq!(moved.size(), rect.size());
}

#[test]
fn contains_is_inclusive_of_edges() {
    let rect = Rect::from_origin_size(Point::new(10.0, 10.0), Size::new(20.0, 20.0));

    assert!(rect.contains(10.0, 10.0));
    assert!(rect.contains(30.0, 30.0));
    assert!(!rect.contains(30.1, 15.0));
}

#[test]
fn dp_scales_with_density() {
    assert_eq!(Dp(8.0).to_px(2.5), 20.0);
    assert_eq!(Dp::from_px(20.0, 2.5), Dp(8.0));
}
