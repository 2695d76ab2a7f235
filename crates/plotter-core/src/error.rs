use thiserror::Error;

/// Rejected widget configuration.
///
/// Runtime input never fails (pointer positions are clamped, stray events are
/// ignored); only building a [`GridConfig`](crate::GridConfig) can.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid range is empty: min {min} must be below max {max}")]
    EmptyRange { min: i32, max: i32 },

    #[error("canvas size must be positive and finite, got {0}")]
    InvalidCanvasSize(f32),

    #[error("margin must be non-negative and finite, got {0}")]
    InvalidMargin(f32),

    #[error("margin {margin} leaves no drawable area on a {canvas_size}px canvas")]
    NoDrawableArea { canvas_size: f32, margin: f32 },
}
