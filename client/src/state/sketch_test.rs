use super::*;

fn mounted() -> SketchState {
    SketchState { mounted: true, ..SketchState::default() }
}

#[test]
fn empty_pad_has_no_snapshot() {
    assert_eq!(mounted().snapshot(), Ok(None));
}

#[test]
fn unmounted_pad_cannot_be_read() {
    let mut sketch = SketchState::default();
    sketch.begin_stroke(1.0, 1.0);
    assert_eq!(sketch.snapshot(), Err(SketchError::NotMounted));
}

#[test]
fn snapshot_serializes_strokes_with_canvas_size() {
    let mut sketch = mounted();
    sketch.begin_stroke(1.0, 2.0);
    sketch.extend_stroke(3.0, 4.0);
    sketch.end_stroke();

    let json: serde_json::Value = serde_json::from_str(&sketch.snapshot().unwrap().unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "lines": [{
                "points": [{"x": 1.0, "y": 2.0}, {"x": 3.0, "y": 4.0}],
                "brushColor": "#000",
                "brushRadius": 2.0
            }],
            "width": 600,
            "height": 400
        })
    );
}

#[test]
fn extend_without_active_stroke_is_ignored() {
    let mut sketch = mounted();
    assert!(!sketch.extend_stroke(1.0, 1.0));

    sketch.begin_stroke(0.0, 0.0);
    sketch.end_stroke();
    assert!(!sketch.extend_stroke(5.0, 5.0));
    assert_eq!(sketch.lines[0].points.len(), 1);
}

#[test]
fn repeated_point_is_not_recorded_twice() {
    let mut sketch = mounted();
    sketch.begin_stroke(0.0, 0.0);
    assert!(sketch.extend_stroke(1.0, 1.0));
    assert!(!sketch.extend_stroke(1.0, 1.0));
    assert_eq!(sketch.lines[0].points.len(), 2);
}

#[test]
fn clear_drops_every_stroke() {
    let mut sketch = mounted();
    sketch.begin_stroke(0.0, 0.0);
    sketch.begin_stroke(5.0, 5.0);

    sketch.clear();

    assert!(sketch.is_empty());
    assert!(!sketch.drawing);
    assert_eq!(sketch.snapshot(), Ok(None));
}
