// Test doubles shared by the integration tests: a surface that records draw
// calls and a status sink that keeps the last texts.

#![allow(dead_code)]

use glam::Vec2;
use plotter_core::*;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Vec2),
    Line { from: Vec2, to: Vec2, stroke: Stroke },
    Circle { center: Vec2, radius: f32, color: &'static str, shadow: Shadow },
    Text { at: Vec2, text: String, style: TextStyle },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    pub frames: usize,
}

impl RecordingSurface {
    pub fn lines(&self) -> impl Iterator<Item = (&Vec2, &Vec2, &Stroke)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Line { from, to, stroke } => Some((from, to, stroke)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&Vec2, &str, &TextStyle)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { at, text, style } => Some((at, text.as_str(), style)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (&Vec2, f32, &'static str)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Circle { center, radius, color, .. } => Some((center, *radius, *color)),
            _ => None,
        })
    }

    /// Color of the most recently drawn marker.
    pub fn last_marker_color(&self) -> Option<&'static str> {
        self.circles().last().map(|(_, _, color)| color)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, size: Vec2) {
        // A clear starts a new frame; keep only the latest one.
        self.calls.clear();
        self.frames += 1;
        self.calls.push(DrawCall::Clear(size));
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.calls.push(DrawCall::Line { from, to, stroke });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &'static str, shadow: Shadow) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
            shadow,
        });
    }

    fn text(&mut self, at: Vec2, text: &str, style: TextStyle) {
        self.calls.push(DrawCall::Text {
            at,
            text: text.to_string(),
            style,
        });
    }
}

#[derive(Default, Debug)]
pub struct RecordingStatus {
    pub target: String,
    pub result: String,
    pub result_writes: usize,
}

impl StatusSink for RecordingStatus {
    fn show_target(&mut self, text: &str) {
        self.target = text.to_string();
    }

    fn show_result(&mut self, text: &str) {
        self.result = text.to_string();
        self.result_writes += 1;
    }
}

pub type TestWidget = PlotterWidget<RecordingSurface, RecordingStatus>;

pub fn widget(seed: u64) -> TestWidget {
    PlotterWidget::new(
        PlotterConfig::default(),
        seed,
        RecordingSurface::default(),
        RecordingStatus::default(),
    )
    .expect("default config is valid")
}

/// Canvas pixel position of a grid point under the default layout.
pub fn canvas_px(x: i32, y: i32) -> Vec2 {
    CoordinateMapper::default().to_canvas(GridCoordinate::new(x, y))
}

/// Grab the marker where it sits and drop it on `(x, y)`.
pub fn drag_to(w: &mut TestWidget, x: i32, y: i32) {
    let at = w.mapper().to_canvas(w.marker().position);
    w.pointer_down(at);
    w.pointer_move(canvas_px(x, y));
    w.pointer_up();
}
