//! Pointer-driven drag state machine.
//!
//! ```text
//!          pointer-down within tolerance
//!   Idle ---------------------------------> Dragging --+
//!    ^                                         |       | pointer-move:
//!    +------ pointer-up / pointer-leave -------+  <----+ snap + clamp
//! ```
//!
//! Every handler reports whether the marker needs to be redrawn.

use crate::config::InteractionConfig;
use crate::grid::CoordinateMapper;
use crate::marker::MarkerState;
use glam::Vec2;

/// A pointer event in canvas pixel space (origin at the canvas top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down(Vec2),
    Move(Vec2),
    Up,
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionController {
    grab_tolerance: f32,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&InteractionConfig::default())
    }
}

impl InteractionController {
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            grab_tolerance: config.grab_tolerance,
        }
    }

    /// Whether a pointer at `canvas_px` is close enough to grab the marker.
    ///
    /// Uses the unrounded grid position, so the pointer only has to land within
    /// half a cell of the marker on each axis.
    pub fn hit_test(&self, mapper: &CoordinateMapper, marker: &MarkerState, canvas_px: Vec2) -> bool {
        let c = mapper.to_grid_continuous(mapper.canvas_to_centered(canvas_px));
        (c.x - marker.position.x as f32).abs() <= self.grab_tolerance
            && (c.y - marker.position.y as f32).abs() <= self.grab_tolerance
    }

    pub fn handle(&self, mapper: &CoordinateMapper, marker: &mut MarkerState, input: PointerInput) -> bool {
        match input {
            PointerInput::Down(p) => self.pointer_down(mapper, marker, p),
            PointerInput::Move(p) => self.pointer_move(mapper, marker, p),
            PointerInput::Up | PointerInput::Leave => self.release(marker),
        }
    }

    pub fn pointer_down(&self, mapper: &CoordinateMapper, marker: &mut MarkerState, canvas_px: Vec2) -> bool {
        if !self.hit_test(mapper, marker, canvas_px) {
            return false;
        }
        if marker.dragging {
            return false;
        }
        marker.dragging = true;
        log::debug!("[drag] grabbed marker at {}", marker.position);
        true
    }

    pub fn pointer_move(&self, mapper: &CoordinateMapper, marker: &mut MarkerState, canvas_px: Vec2) -> bool {
        if !marker.dragging {
            return false;
        }
        let snapped = mapper.to_grid(mapper.canvas_to_centered(canvas_px));
        if snapped == marker.position {
            return false;
        }
        log::trace!("[drag] {} -> {}", marker.position, snapped);
        marker.position = snapped;
        true
    }

    /// Pointer-up and pointer-leave. A no-op while idle.
    pub fn release(&self, marker: &mut MarkerState) -> bool {
        if !marker.dragging {
            return false;
        }
        marker.dragging = false;
        log::debug!("[drag] released marker at {}", marker.position);
        true
    }
}
