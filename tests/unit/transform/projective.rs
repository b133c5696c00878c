use super::*;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn identity_projects_points_unchanged() {
    let p = Point::new(12.0, -4.0);
    assert_eq!(Transform3D::IDENTITY.project(p), p);
    assert!(Transform3D::IDENTITY.is_identity());
}

#[test]
fn quarter_turn_about_z_axis() {
    let r = Transform3D::rotate(std::f64::consts::FRAC_PI_2, [0.0, 0.0, 1.0]);
    assert!(close(r.project(Point::new(1.0, 0.0)), Point::new(0.0, 1.0)));
}

#[test]
fn degenerate_axis_is_identity() {
    assert!(Transform3D::rotate(1.0, [0.0, 0.0, 0.0]).is_identity());
}

#[test]
fn then_applies_left_to_right() {
    let t = Transform3D::translate(5.0, 0.0, 0.0).then(Transform3D::rotate(
        std::f64::consts::FRAC_PI_2,
        [0.0, 0.0, 1.0],
    ));
    assert!(close(t.project(Point::ZERO), Point::new(0.0, 5.0)));
}

#[test]
fn zero_angle_rotation_leaves_plane_alone() {
    let rot = Rotation3D {
        angle_deg: 0.0,
        axis: [1.0, 0.0, 0.0],
        anchor: UnitPoint::new(0.5, 0.2),
        anchor_z: 0.0,
        perspective: 1.0,
    };
    let m = rot.matrix(Size::new(390.0, 844.0));
    for p in [Point::ZERO, Point::new(390.0, 844.0), Point::new(100.0, 700.0)] {
        assert!(close(m.project(p), p));
    }
}

#[test]
fn tilting_back_pulls_lower_content_toward_pivot() {
    let size = Size::new(390.0, 844.0);
    let rot = Rotation3D {
        angle_deg: -10.0,
        axis: [1.0, 0.0, 0.0],
        anchor: UnitPoint::new(0.5, 0.2),
        anchor_z: 0.0,
        perspective: 1.0,
    };
    let m = rot.matrix(size);
    let pivot = rot.anchor.resolve(size);
    assert!(close(m.project(pivot), pivot));

    let bottom = Point::new(195.0, 844.0);
    let projected = m.project(bottom);
    assert!(projected.y < bottom.y);
    assert!(projected.y > pivot.y);
}
