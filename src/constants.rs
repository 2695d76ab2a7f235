// DOM element ids the page must provide.

pub const CANVAS_ID: &str = "graph";
pub const TARGET_ID: &str = "target"; // "Target: (x, y)"
pub const RESULT_ID: &str = "result"; // success / retry message
pub const CHECK_BUTTON_ID: &str = "checkBtn";
