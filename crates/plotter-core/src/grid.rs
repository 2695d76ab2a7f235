//! Grid/pixel coordinate types and the affine mapping between them.
//!
//! Three spaces are involved:
//! - **grid space**: integer lattice points, y grows upward;
//! - **centered pixel space** ([`PixelCoordinate`]): pixels relative to the
//!   canvas center, y grows downward;
//! - **canvas pixel space**: pixels relative to the canvas top-left corner,
//!   which is what pointer events and the drawing surface use.

use crate::config::GridConfig;
use crate::error::ConfigError;
use glam::Vec2;
use std::fmt;

/// A point on the drawing surface, relative to the canvas center.
pub type PixelCoordinate = Vec2;

/// An integer lattice point on the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridCoordinate {
    pub x: i32,
    pub y: i32,
}

impl GridCoordinate {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp both components into `[min, max]`.
    #[inline]
    pub fn clamped(self, min: i32, max: i32) -> Self {
        Self {
            x: self.x.clamp(min, max),
            y: self.y.clamp(min, max),
        }
    }

    #[inline]
    pub fn is_within(self, min: i32, max: i32) -> bool {
        (min..=max).contains(&self.x) && (min..=max).contains(&self.y)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridCoordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Round half up: exact halves go to the larger integer on both sides of zero.
///
/// Compares the fractional part instead of adding 0.5, which would round
/// values just below a half up in `f32`.
#[inline]
pub fn round_half_up(v: f32) -> f32 {
    let r = v.floor();
    if v - r >= 0.5 {
        r + 1.0
    } else {
        r
    }
}

/// Stateless conversion between grid and pixel space for a fixed canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateMapper {
    config: GridConfig,
    step: f32,
    center: Vec2,
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::build(GridConfig::default())
    }
}

impl CoordinateMapper {
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GridConfig) -> Self {
        let step = config.step();
        let half = config.canvas_size / 2.0;
        Self {
            config,
            step,
            center: Vec2::splat(half),
        }
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Canvas center in canvas pixel space.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Half the side length of the drawable area.
    #[inline]
    pub fn drawable_extent(&self) -> f32 {
        self.config.canvas_size / 2.0 - self.config.margin
    }

    /// Grid point to centered pixel position.
    #[inline]
    pub fn to_pixel(&self, g: GridCoordinate) -> PixelCoordinate {
        Vec2::new(g.x as f32 * self.step, -(g.y as f32) * self.step)
    }

    /// Grid point to canvas pixel position (center offset applied).
    #[inline]
    pub fn to_canvas(&self, g: GridCoordinate) -> Vec2 {
        self.center + self.to_pixel(g)
    }

    #[inline]
    pub fn canvas_to_centered(&self, canvas_px: Vec2) -> PixelCoordinate {
        canvas_px - self.center
    }

    /// Unrounded, unclamped grid position of a centered pixel.
    #[inline]
    pub fn to_grid_continuous(&self, p: PixelCoordinate) -> Vec2 {
        Vec2::new(p.x / self.step, -p.y / self.step)
    }

    /// Centered pixel to the nearest grid point, clamped to the grid range.
    pub fn to_grid(&self, p: PixelCoordinate) -> GridCoordinate {
        let c = self.to_grid_continuous(p);
        self.snap(c)
    }

    /// Round a continuous grid position to the lattice and clamp it.
    ///
    /// Non-finite components saturate (`NaN` becomes 0) before clamping, so
    /// the result is always in range.
    pub fn snap(&self, c: Vec2) -> GridCoordinate {
        let GridConfig { min, max, .. } = self.config;
        GridCoordinate::new(
            (round_half_up(c.x) as i32).clamp(min, max),
            (round_half_up(c.y) as i32).clamp(min, max),
        )
    }

    /// Every lattice point of the grid, row by row from `min`.
    pub fn lattice(&self) -> impl Iterator<Item = GridCoordinate> {
        let GridConfig { min, max, .. } = self.config;
        (min..=max).flat_map(move |y| (min..=max).map(move |x| GridCoordinate::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_step_is_23_pixels() {
        let m = CoordinateMapper::default();
        assert_eq!(m.step(), 23.0);
        assert_eq!(m.center(), Vec2::new(250.0, 250.0));
        assert_eq!(m.drawable_extent(), 230.0);
    }

    #[test]
    fn round_half_up_prefers_larger_integer() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
    }

    #[test]
    fn round_half_up_keeps_values_just_below_a_half() {
        let below = 0.5 - f32::EPSILON / 4.0;
        assert!(below < 0.5);
        assert_eq!(round_half_up(below), 0.0);
        assert_eq!(round_half_up(-below), 0.0);
        assert_eq!(round_half_up(10.0 - below), 10.0);
        assert_eq!(round_half_up(-0.5 - f32::EPSILON / 2.0), -1.0);
    }

    #[test]
    fn pixel_just_below_half_a_cell_snaps_to_origin() {
        let m = CoordinateMapper::default();
        let px = f32::from_bits(11.5_f32.to_bits() - 1);
        let c = m.to_grid_continuous(Vec2::new(px, 0.0));
        assert!(c.x < 0.5);
        assert_eq!(m.to_grid(Vec2::new(px, 0.0)), GridCoordinate::ORIGIN);
        assert_eq!(m.to_grid(Vec2::new(11.5, 0.0)), GridCoordinate::new(1, 0));
    }

    #[test]
    fn new_rejects_invalid_config() {
        let bad = GridConfig {
            max: -10,
            ..GridConfig::default()
        };
        assert!(matches!(CoordinateMapper::new(bad), Err(ConfigError::EmptyRange { .. })));
    }

    #[test]
    fn display_matches_target_format() {
        assert_eq!(GridCoordinate::new(3, -4).to_string(), "(3, -4)");
    }

    #[test]
    fn snap_saturates_non_finite_input() {
        let m = CoordinateMapper::default();
        assert_eq!(m.snap(Vec2::new(f32::NAN, f32::INFINITY)), GridCoordinate::new(0, 10));
        assert_eq!(m.snap(Vec2::new(f32::NEG_INFINITY, 0.2)), GridCoordinate::new(-10, 0));
    }
}
