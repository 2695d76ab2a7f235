mod common;

use common::{DrawCall, RecordingSurface};
use glam::Vec2;
use plotter_core::constants::*;
use plotter_core::*;

fn render(marker: MarkerState) -> RecordingSurface {
    let mut surface = RecordingSurface::default();
    GridRenderer.render(&CoordinateMapper::default(), &marker, &mut surface);
    surface
}

#[test]
fn frame_starts_with_full_clear() {
    let s = render(MarkerState::default());
    assert_eq!(s.calls.first(), Some(&DrawCall::Clear(Vec2::splat(500.0))));
    assert_eq!(s.frames, 1);
}

#[test]
fn draws_grid_axes_and_ticks() {
    let s = render(MarkerState::default());
    let grid_lines = s.lines().filter(|(_, _, st)| st.color == GRID_LINE_COLOR).count();
    let axis_lines = s.lines().filter(|(_, _, st)| st.color == AXIS_COLOR).count();
    assert_eq!(grid_lines, 42);
    // two axes plus one tick per non-zero position on each axis
    assert_eq!(axis_lines, 2 + 40);

    for (from, to, st) in s.lines().filter(|(_, _, st)| st.color == GRID_LINE_COLOR) {
        assert_eq!(st.width, 1.0);
        for v in [from.x, from.y, to.x, to.y] {
            assert!((20.0..=480.0).contains(&v), "grid line leaves drawable area: {v}");
        }
    }
}

#[test]
fn axes_span_drawable_area_through_origin() {
    let s = render(MarkerState::default());
    let axes: Vec<_> = s
        .lines()
        .filter(|(_, _, st)| st.color == AXIS_COLOR)
        .take(2)
        .map(|(a, b, _)| (*a, *b))
        .collect();
    assert_eq!(axes[0], (Vec2::new(20.0, 250.0), Vec2::new(480.0, 250.0)));
    assert_eq!(axes[1], (Vec2::new(250.0, 20.0), Vec2::new(250.0, 480.0)));
}

#[test]
fn labels_skip_zero_and_use_axis_alignment() {
    let s = render(MarkerState::default());
    let texts: Vec<_> = s.texts().collect();
    assert_eq!(texts.len(), 40);
    assert!(texts.iter().all(|(_, t, _)| *t != "0"));

    let x_label = texts
        .iter()
        .find(|(_, t, st)| *t == "3" && st.align == TextAlign::Center)
        .expect("x label for 3");
    assert_eq!(*x_label.0, Vec2::new(250.0 + 69.0, 258.0));
    assert_eq!(x_label.2.baseline, TextBaseline::Top);

    let y_label = texts
        .iter()
        .find(|(_, t, st)| *t == "3" && st.align == TextAlign::Right)
        .expect("y label for 3");
    assert_eq!(*y_label.0, Vec2::new(240.0, 250.0 - 69.0));
    assert_eq!(y_label.2.baseline, TextBaseline::Middle);
    assert_eq!(y_label.2.font, "13px Arial");
}

#[test]
fn marker_color_follows_drag_state() {
    let idle = render(MarkerState {
        position: GridCoordinate::new(-2, 5),
        dragging: false,
    });
    let circles: Vec<_> = idle.circles().collect();
    assert_eq!(circles.len(), 1);
    assert_eq!(*circles[0].0, Vec2::new(250.0 - 46.0, 250.0 - 115.0));
    assert_eq!(circles[0].1, 10.0);
    assert_eq!(circles[0].2, MARKER_IDLE_COLOR);

    let dragging = render(MarkerState {
        position: GridCoordinate::ORIGIN,
        dragging: true,
    });
    assert_eq!(dragging.last_marker_color(), Some(MARKER_DRAG_COLOR));
    assert_ne!(MARKER_DRAG_COLOR, MARKER_IDLE_COLOR);
}

#[test]
fn marker_is_drawn_last_with_shadow() {
    let s = render(MarkerState::default());
    match s.calls.last() {
        Some(DrawCall::Circle { shadow, .. }) => {
            assert_eq!(shadow.color, "#0006");
            assert_eq!(shadow.blur, 6.0);
        }
        other => panic!("expected marker last, got {other:?}"),
    }
}

#[test]
fn css_keywords() {
    assert_eq!(TextAlign::Right.as_css(), "right");
    assert_eq!(TextBaseline::Middle.as_css(), "middle");
}
