//! Platform-independent core of the coordinate plotter.
//!
//! Nothing here touches `web-sys`: the browser shell owns the canvas, the DOM
//! text elements and the real timers, and drives a [`PlotterWidget`] through
//! its public operations. Everything in this crate runs (and is tested) on the
//! host.

pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod grid;
pub mod interaction;
pub mod marker;
pub mod render;
pub mod timer;
pub mod widget;

pub use config::*;
pub use error::*;
pub use game::*;
pub use grid::*;
pub use interaction::*;
pub use marker::*;
pub use render::*;
pub use timer::*;
pub use widget::*;
