use crate::constants::*;
use crate::error::ConfigError;
use std::time::Duration;

/// Canvas geometry and the inclusive integer range shown on both axes.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub canvas_size: f32,
    pub margin: f32,
    pub min: i32,
    pub max: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            margin: MARGIN,
            min: GRID_MIN,
            max: GRID_MAX,
        }
    }
}

impl GridConfig {
    pub fn new(canvas_size: f32, margin: f32, min: i32, max: i32) -> Result<Self, ConfigError> {
        let config = Self {
            canvas_size,
            margin,
            min,
            max,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min >= self.max {
            return Err(ConfigError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if !self.canvas_size.is_finite() || self.canvas_size <= 0.0 {
            return Err(ConfigError::InvalidCanvasSize(self.canvas_size));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ConfigError::InvalidMargin(self.margin));
        }
        if self.canvas_size - 2.0 * self.margin <= 0.0 {
            return Err(ConfigError::NoDrawableArea {
                canvas_size: self.canvas_size,
                margin: self.margin,
            });
        }
        Ok(())
    }

    /// Pixels between adjacent grid lines.
    #[inline]
    pub fn step(&self) -> f32 {
        (self.canvas_size - 2.0 * self.margin) / (self.max - self.min) as f32
    }
}

/// Tuning for the target game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub success_delay: Duration,
    pub success_message: &'static str,
    pub retry_message: &'static str,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            success_delay: Duration::from_millis(SUCCESS_DELAY_MS),
            success_message: SUCCESS_MESSAGE,
            retry_message: RETRY_MESSAGE,
        }
    }
}

/// Pointer handling on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
    /// Half-width of the grab box around the marker, in grid units.
    pub grab_tolerance: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            grab_tolerance: GRAB_TOLERANCE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotterConfig {
    pub grid: GridConfig,
    pub interaction: InteractionConfig,
    pub game: GameConfig,
}
