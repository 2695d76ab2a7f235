//! Drawing the grid, axes, labels and marker onto an abstract surface.

use crate::constants::*;
use crate::grid::{CoordinateMapper, GridCoordinate};
use crate::marker::MarkerState;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: &'static str,
    pub blur: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Center,
    Right,
}

impl TextAlign {
    /// Canvas 2D `textAlign` keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
}

impl TextBaseline {
    /// Canvas 2D `textBaseline` keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font: &'static str,
    pub color: &'static str,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// The drawing primitives the renderer needs. Coordinates are canvas pixels
/// (origin top-left, y down).
pub trait Surface {
    fn clear(&mut self, size: Vec2);
    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &'static str, shadow: Shadow);
    fn text(&mut self, at: Vec2, text: &str, style: TextStyle);
}

const GRID_STROKE: Stroke = Stroke {
    color: GRID_LINE_COLOR,
    width: GRID_LINE_WIDTH,
};

const AXIS_STROKE: Stroke = Stroke {
    color: AXIS_COLOR,
    width: AXIS_LINE_WIDTH,
};

const X_LABEL_STYLE: TextStyle = TextStyle {
    font: LABEL_FONT,
    color: LABEL_COLOR,
    align: TextAlign::Center,
    baseline: TextBaseline::Top,
};

const Y_LABEL_STYLE: TextStyle = TextStyle {
    font: LABEL_FONT,
    color: LABEL_COLOR,
    align: TextAlign::Right,
    baseline: TextBaseline::Middle,
};

const MARKER_SHADOW: Shadow = Shadow {
    color: MARKER_SHADOW_COLOR,
    blur: MARKER_SHADOW_BLUR,
};

/// Stateless: every call redraws the whole picture from the marker state.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridRenderer;

impl GridRenderer {
    pub fn render<S: Surface + ?Sized>(&self, mapper: &CoordinateMapper, marker: &MarkerState, surface: &mut S) {
        self.draw_grid(mapper, surface);
        self.draw_marker(mapper, marker, surface);
    }

    pub fn draw_grid<S: Surface + ?Sized>(&self, mapper: &CoordinateMapper, surface: &mut S) {
        let cfg = mapper.config();
        let c = mapper.center();
        let e = mapper.drawable_extent();
        surface.clear(Vec2::splat(cfg.canvas_size));

        for i in cfg.min..=cfg.max {
            let p = mapper.to_canvas(GridCoordinate::new(i, i));
            surface.line(Vec2::new(p.x, c.y - e), Vec2::new(p.x, c.y + e), GRID_STROKE);
            surface.line(Vec2::new(c.x - e, p.y), Vec2::new(c.x + e, p.y), GRID_STROKE);
        }

        surface.line(Vec2::new(c.x - e, c.y), Vec2::new(c.x + e, c.y), AXIS_STROKE);
        surface.line(Vec2::new(c.x, c.y - e), Vec2::new(c.x, c.y + e), AXIS_STROKE);

        for i in (cfg.min..=cfg.max).filter(|&i| i != 0) {
            let label = i.to_string();

            let x = mapper.to_canvas(GridCoordinate::new(i, 0)).x;
            surface.line(
                Vec2::new(x, c.y - TICK_HALF_LENGTH),
                Vec2::new(x, c.y + TICK_HALF_LENGTH),
                AXIS_STROKE,
            );
            surface.text(Vec2::new(x, c.y + X_LABEL_OFFSET), &label, X_LABEL_STYLE);

            let y = mapper.to_canvas(GridCoordinate::new(0, i)).y;
            surface.line(
                Vec2::new(c.x - TICK_HALF_LENGTH, y),
                Vec2::new(c.x + TICK_HALF_LENGTH, y),
                AXIS_STROKE,
            );
            surface.text(Vec2::new(c.x - Y_LABEL_OFFSET, y), &label, Y_LABEL_STYLE);
        }
    }

    pub fn draw_marker<S: Surface + ?Sized>(&self, mapper: &CoordinateMapper, marker: &MarkerState, surface: &mut S) {
        let color = if marker.dragging {
            MARKER_DRAG_COLOR
        } else {
            MARKER_IDLE_COLOR
        };
        surface.fill_circle(mapper.to_canvas(marker.position), MARKER_RADIUS, color, MARKER_SHADOW);
    }
}
