use super::*;
use crate::animation::spring::SpringSpec;

fn sheet() -> InlineSheet {
    InlineSheet::new(SheetConfig::default(), false).unwrap()
}

#[test]
fn toggle_eases_open_over_default_duration() {
    let mut s = sheet();
    assert_eq!(s.frame(0.0).phase, SheetPhase::Closed);
    s.toggle(1.0);
    assert!(s.is_presented());

    let f = s.frame(1.1);
    assert_eq!(f.phase, SheetPhase::Opening);
    assert!(f.presented > 0.0 && f.presented < 1.0);
    assert_eq!(f.model, 1.0);

    let f = s.frame(1.5);
    assert_eq!(f.presented, 1.0);
    assert_eq!(f.phase, SheetPhase::Open);
    assert_eq!(f.overlay_translation, Some(Vec2::ZERO));
}

#[test]
fn double_present_does_not_restart() {
    let mut s = sheet();
    s.set_presented(true, 0.0);
    let before = s.frame(0.2).presented;
    s.set_presented(true, 0.2);
    assert_eq!(s.frame(0.2).presented, before);
    assert_eq!(s.frame(0.35).presented, 1.0);
}

#[test]
fn overlay_hidden_at_rest() {
    let mut s = sheet();
    let f = s.frame(0.0);
    assert!(f.visuals.overlay.is_none());
    assert!(f.overlay_translation.is_none());
}

#[test]
fn drag_then_release_below_threshold_closes() {
    let mut s = InlineSheet::new(SheetConfig::default(), true).unwrap();
    let h = SheetConfig::default().viewport.height();
    s.drag_changed(0.0, 0.0);
    s.drag_changed(h * 0.2, 0.016);
    s.drag_changed(h * 0.4, 0.032);
    assert_eq!(s.phase(), SheetPhase::Dragging);
    let mid = s.frame(0.1);
    assert!(mid.presented < 1.0);
    assert!((mid.model - 0.6).abs() < 1e-12);

    s.drag_ended(0.1);
    assert!(!s.is_presented());
    assert_eq!(s.frame(0.4).presented, 0.0);
    assert_eq!(s.phase(), SheetPhase::Closed);
}

#[test]
fn toggle_wins_over_in_flight_drag_spring() {
    let mut s = InlineSheet::new(SheetConfig::default(), true).unwrap();
    let h = SheetConfig::default().viewport.height();
    s.drag_update(h * 0.1, 0.0);
    s.frame(0.05);
    assert!(!s.animator().is_settled());

    s.set_presented(true, 0.05);
    assert_eq!(s.frame(0.5).presented, 1.0);
    assert!(s.animator().is_settled());
}

#[test]
fn measured_overlay_bounds_reach_the_frame() {
    let mut s = sheet();
    let bounds = Rect::new(0.0, 75.0, 390.0, 844.0);
    s.measure_overlay(bounds);
    s.set_presented(true, 0.0);
    let f = s.frame(0.1);
    assert_eq!(f.visuals.overlay.unwrap().transition.content_bounds, bounds);
}

#[test]
fn spring_overshoot_is_clamped_before_drawing() {
    let config = SheetConfig {
        drag_spring: SpringSpec::new(1.0, 400.0, 4.0).unwrap(),
        ..SheetConfig::default()
    };
    let h = config.viewport.height();
    let mut s = InlineSheet::new(config, false).unwrap();
    s.drag_update(-h * 0.98, 0.0);

    let mut overshot = false;
    for i in 0..=60 {
        let f = s.frame(i as f64 / 120.0);
        overshot |= s.animator().value() > 1.0;
        assert!((0.0..=1.0).contains(&f.presented));
        assert_eq!(f.visuals.progress, f.presented);
        if let Some(overlay) = f.visuals.overlay {
            assert!(overlay.transition.progress >= 0.0);
            assert!(f.overlay_translation.unwrap().y >= 0.0);
        }
    }
    assert!(overshot);
}

#[test]
fn incremental_drag_reports_dragging() {
    let mut s = InlineSheet::new(SheetConfig::default(), true).unwrap();
    s.drag_update(84.4, 0.0);
    assert_eq!(s.phase(), SheetPhase::Dragging);
    assert_eq!(s.controller().state().drag_delta(), 84.4);
    s.drag_ended(0.1);
    assert_ne!(s.phase(), SheetPhase::Dragging);
}

#[test]
fn toggle_mid_drag_settles_closed() {
    let mut s = InlineSheet::new(SheetConfig::default(), true).unwrap();
    let h = SheetConfig::default().viewport.height();
    s.drag_changed(0.0, 0.0);
    s.drag_changed(h * 0.2, 0.016);
    s.set_presented(false, 0.05);

    let f = s.frame(2.0);
    assert_eq!(f.presented, 0.0);
    assert_eq!(f.phase, SheetPhase::Closed);
}
