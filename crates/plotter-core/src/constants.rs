// Shared layout, palette and game tuning constants used by the core and the web frontend.

// Canvas layout (pixels)
pub const CANVAS_SIZE: f32 = 500.0; // square canvas edge
pub const MARGIN: f32 = 20.0; // blank border on each side of the drawable area

// Grid range (inclusive, both axes)
pub const GRID_MIN: i32 = -10;
pub const GRID_MAX: i32 = 10;

// Interaction
pub const GRAB_TOLERANCE: f32 = 0.5; // grid units, per axis
pub const SUCCESS_DELAY_MS: u64 = 1000; // pause before the next target appears

// Marker
pub const MARKER_RADIUS: f32 = 10.0;
pub const MARKER_IDLE_COLOR: &str = "#e53935"; // red
pub const MARKER_DRAG_COLOR: &str = "#1976d2"; // blue
pub const MARKER_SHADOW_COLOR: &str = "#0006";
pub const MARKER_SHADOW_BLUR: f32 = 6.0;

// Grid and axes
pub const GRID_LINE_COLOR: &str = "#ccc";
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const AXIS_COLOR: &str = "#222";
pub const AXIS_LINE_WIDTH: f32 = 2.0;

// Ticks and labels
pub const TICK_HALF_LENGTH: f32 = 5.0;
pub const X_LABEL_OFFSET: f32 = 8.0; // below the x-axis
pub const Y_LABEL_OFFSET: f32 = 10.0; // left of the y-axis
pub const LABEL_FONT: &str = "13px Arial";
pub const LABEL_COLOR: &str = AXIS_COLOR;

// Result messages
pub const SUCCESS_MESSAGE: &str = "Correct! New target...";
pub const RETRY_MESSAGE: &str = "Try again!";
