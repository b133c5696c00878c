use super::*;

#[test]
fn viewport_rejects_degenerate_sizes() {
    assert!(Viewport::new(390.0, 0.0).is_err());
    assert!(Viewport::new(-1.0, 844.0).is_err());
    assert!(Viewport::new(f64::NAN, 844.0).is_err());
    assert!(Viewport::new(390.0, 844.0).is_ok());
}

#[test]
fn viewport_extents_follow_bounds() {
    let v = Viewport::from_bounds(Rect::new(10.0, 20.0, 110.0, 220.0)).unwrap();
    assert_eq!(v.width(), 100.0);
    assert_eq!(v.height(), 200.0);
    assert_eq!(v.max_x(), 110.0);
    assert_eq!(v.max_y(), 220.0);
}

#[test]
fn unit_point_resolves_against_size() {
    let p = UnitPoint::new(0.5, 0.2).resolve(Size::new(200.0, 100.0));
    assert_eq!(p, Point::new(100.0, 20.0));
    assert_eq!(UnitPoint::TOP_LEADING.resolve(Size::new(5.0, 5.0)), Point::ZERO);
}
