use crate::grid::GridCoordinate;

/// The draggable marker: where it sits on the grid and whether it is held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarkerState {
    pub position: GridCoordinate,
    pub dragging: bool,
}

impl MarkerState {
    /// Back to the origin, released.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
