use super::*;

const EDGES: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Leading, Edge::Trailing];

fn screen() -> Rect {
    Rect::new(0.0, 0.0, 390.0, 844.0)
}

fn content() -> Rect {
    Rect::new(20.0, 100.0, 220.0, 400.0)
}

#[test]
fn zero_progress_is_identity_for_every_edge() {
    for edge in EDGES {
        assert_eq!(
            compute_translation(edge, 0.0, screen(), content()),
            Vec2::ZERO,
            "{edge:?}"
        );
    }
}

#[test]
fn full_progress_targets() {
    assert_eq!(
        compute_translation(Edge::Trailing, 1.0, screen(), content()),
        Vec2::new(390.0, 0.0)
    );
    assert_eq!(
        compute_translation(Edge::Bottom, 1.0, screen(), content()),
        Vec2::new(0.0, 844.0)
    );
    assert_eq!(
        compute_translation(Edge::Leading, 1.0, screen(), content()),
        Vec2::new(-220.0, 0.0)
    );
    assert_eq!(
        compute_translation(Edge::Top, 1.0, screen(), content()),
        Vec2::new(0.0, -400.0)
    );
}

#[test]
fn trailing_and_bottom_ignore_content_bounds() {
    let other = Rect::new(-50.0, -50.0, 5000.0, 5000.0);
    for edge in [Edge::Trailing, Edge::Bottom] {
        assert_eq!(
            compute_translation(edge, 0.6, screen(), content()),
            compute_translation(edge, 0.6, screen(), other)
        );
    }
}

#[test]
fn content_ends_up_clear_of_screen() {
    let c = content();
    let s = screen();
    let up = compute_translation(Edge::Top, 1.0, s, c);
    assert!(c.max_y() + up.y <= s.min_y());
    let left = compute_translation(Edge::Leading, 1.0, s, c);
    assert!(c.max_x() + left.x <= s.min_x());
    let right = compute_translation(Edge::Trailing, 1.0, s, c);
    assert!(c.min_x() + right.x >= s.max_x());
    let down = compute_translation(Edge::Bottom, 1.0, s, c);
    assert!(c.min_y() + down.y >= s.max_y());
}

#[test]
fn translation_scales_linearly() {
    let full = compute_translation(Edge::Top, 1.0, screen(), content());
    let quarter = compute_translation(Edge::Top, 0.25, screen(), content());
    assert_eq!(quarter, full * 0.25);
}

#[test]
fn unmeasured_content_is_tolerated() {
    let out = ScreenOut::new(Edge::Top, 1.0);
    assert!(!out.is_measured());
    let v = out.translation(&Viewport::default());
    assert!(v.x == 0.0 && v.y == 0.0);
}

#[test]
fn measurement_updates_screen_out() {
    let mut out = ScreenOut::new(Edge::Leading, 0.5);
    out.measured(content());
    assert!(out.is_measured());
    assert_eq!(
        out.translation(&Viewport::default()),
        Vec2::new(-110.0, 0.0)
    );
    assert_eq!(
        out.affine(&Viewport::default()),
        Affine::translate(Vec2::new(-110.0, 0.0))
    );
}

#[test]
fn transition_pair_interpolates_between_ends() {
    let mut pair = screen_out(Edge::Bottom);
    pair.measured(content());
    assert_eq!(pair.active.progress, 1.0);
    assert_eq!(pair.identity.progress, 0.0);
    assert_eq!(pair.insertion(0.0).progress, 1.0);
    assert_eq!(pair.insertion(1.0).progress, 0.0);
    assert_eq!(pair.removal(0.25).progress, 0.25);
    assert_eq!(pair.removal(0.25).content_bounds, content());
}

#[test]
fn edges_parse_case_insensitively() {
    assert_eq!(" Top ".parse::<Edge>().unwrap(), Edge::Top);
    assert_eq!("TRAILING".parse::<Edge>().unwrap(), Edge::Trailing);
    assert_eq!("left".parse::<Edge>().unwrap(), Edge::Leading);
    assert!("".parse::<Edge>().is_err());
    assert!("diagonal".parse::<Edge>().is_err());
}
