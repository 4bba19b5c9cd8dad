//! Sketch pad drawing state.
//!
//! DESIGN
//! ======
//! Strokes are recorded as point lists in canvas pixels. The snapshot is the
//! stroke list serialized as JSON:
//! `{"lines":[{"points":[{"x":..,"y":..}],"brushColor":"#000","brushRadius":2}],"width":600,"height":400}`.
//! An empty pad has no snapshot. `mounted` tracks whether a canvas is on
//! screen; reads while unmounted fail so the workflow can log and carry on.

#[cfg(test)]
#[path = "sketch_test.rs"]
mod sketch_test;

use serde::{Deserialize, Serialize};
use studio::{SketchError, SketchSource};

pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 400;
pub const BRUSH_COLOR: &str = "#000";
pub const BRUSH_RADIUS: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub points: Vec<Point>,
    pub brush_color: String,
    pub brush_radius: f64,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    lines: &'a [Stroke],
    width: u32,
    height: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SketchState {
    pub lines: Vec<Stroke>,
    pub drawing: bool,
    pub mounted: bool,
}

impl SketchState {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Start a stroke at `(x, y)`.
    pub fn begin_stroke(&mut self, x: f64, y: f64) {
        self.lines.push(Stroke {
            points: vec![Point { x, y }],
            brush_color: BRUSH_COLOR.to_owned(),
            brush_radius: BRUSH_RADIUS,
        });
        self.drawing = true;
    }

    /// Extend the current stroke; ignored when no stroke is in progress.
    pub fn extend_stroke(&mut self, x: f64, y: f64) -> bool {
        if !self.drawing {
            return false;
        }
        let Some(stroke) = self.lines.last_mut() else {
            return false;
        };
        let point = Point { x, y };
        if stroke.points.last() == Some(&point) {
            return false;
        }
        stroke.points.push(point);
        true
    }

    pub fn end_stroke(&mut self) {
        self.drawing = false;
    }
}

impl SketchSource for SketchState {
    fn snapshot(&self) -> Result<Option<String>, SketchError> {
        if !self.mounted {
            return Err(SketchError::NotMounted);
        }
        if self.is_empty() {
            return Ok(None);
        }
        let snapshot = Snapshot { lines: &self.lines, width: CANVAS_WIDTH, height: CANVAS_HEIGHT };
        serde_json::to_string(&snapshot)
            .map(Some)
            .map_err(|e| SketchError::Unreadable(e.to_string()))
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.drawing = false;
    }
}
