use super::*;
use crate::sheet::state::SheetPhase;

fn trace(json: &str) -> Trace {
    Trace::from_reader(json.as_bytes()).unwrap()
}

#[test]
fn frame_count_includes_both_ends() {
    let t = trace(r#"{ "fps": 10, "duration": 1.0 }"#);
    assert_eq!(t.frame_count(), 11);
    assert!(t.events.is_empty());
    assert!(!t.initially_presented);
}

#[test]
fn unsorted_events_are_rejected() {
    let err = Trace::from_reader(
        br#"{ "duration": 1, "events": [
            { "at": 0.5, "kind": "toggle" },
            { "at": 0.1, "kind": "toggle" } ] }"#
            .as_slice(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("non-decreasing"));
}

#[test]
fn bad_fps_is_rejected() {
    assert!(Trace::from_reader(br#"{ "fps": 0, "duration": 1 }"#.as_slice()).is_err());
}

#[test]
fn oversized_traces_are_rejected() {
    let err = Trace::from_reader(br#"{ "fps": 60, "duration": 1e300 }"#.as_slice()).unwrap_err();
    assert!(err.to_string().contains("too many frames"));
    assert!(Trace::from_reader(br#"{ "fps": 1e6, "duration": 1 }"#.as_slice()).is_err());

    let unchecked = Trace {
        fps: 60.0,
        duration: 1e300,
        initially_presented: false,
        events: Vec::new(),
    };
    assert_eq!(unchecked.frame_count(), MAX_FRAMES);
    assert!(replay(&unchecked, SheetConfig::default()).is_err());
}

#[test]
fn present_then_settle() {
    let t = trace(
        r#"{ "fps": 20, "duration": 1.0, "events": [
            { "at": 0.0, "kind": "present", "value": true } ] }"#,
    );
    let frames = replay(&t, SheetConfig::default()).unwrap();
    assert_eq!(frames.len(), 21);
    assert_eq!(frames[0].presented, 0.0);
    assert_eq!(frames[0].phase, SheetPhase::Opening);
    let last = frames.last().unwrap();
    assert_eq!(last.presented, 1.0);
    assert_eq!(last.phase, SheetPhase::Open);
    for pair in frames.windows(2) {
        assert!(pair[1].presented >= pair[0].presented);
    }
}

#[test]
fn flick_down_dismisses() {
    let t = trace(
        r#"{ "fps": 30, "duration": 1.0, "initially_presented": true, "events": [
            { "at": 0.10, "kind": "drag", "translation": 0 },
            { "at": 0.15, "kind": "drag", "translation": 150 },
            { "at": 0.20, "kind": "drag", "translation": 300 },
            { "at": 0.25, "kind": "drag_end" } ] }"#,
    );
    let frames = replay(&t, SheetConfig::default()).unwrap();
    assert!(frames.iter().any(|f| f.phase == SheetPhase::Dragging));
    let last = frames.last().unwrap();
    assert!(!last.is_presented);
    assert_eq!(last.presented, 0.0);
    assert_eq!(last.phase, SheetPhase::Closed);
}

#[test]
fn measure_events_reach_overlay() {
    let t = trace(
        r#"{ "fps": 10, "duration": 0.2, "initially_presented": true, "events": [
            { "at": 0.0, "kind": "measure", "rect": [0, 75, 390, 844] } ] }"#,
    );
    let frames = replay(&t, SheetConfig::default()).unwrap();
    let overlay = frames[0].visuals.overlay.unwrap();
    assert_eq!(
        overlay.transition.content_bounds,
        Rect::new(0.0, 75.0, 390.0, 844.0)
    );
}
