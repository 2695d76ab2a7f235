//! One plotter instance: all mutable state lives here, owned by the host.

use crate::config::PlotterConfig;
use crate::error::ConfigError;
use crate::game::{CheckOutcome, GameTask, TargetGame};
use crate::grid::{CoordinateMapper, GridCoordinate};
use crate::interaction::{InteractionController, PointerInput};
use crate::marker::MarkerState;
use crate::render::{GridRenderer, Surface};
use crate::timer::{TimerHandle, TimerQueue};
use glam::Vec2;
use std::time::Duration;

/// The two text outputs the host displays next to the canvas.
pub trait StatusSink {
    fn show_target(&mut self, text: &str);
    fn show_result(&mut self, text: &str);
}

pub struct PlotterWidget<S: Surface, T: StatusSink> {
    mapper: CoordinateMapper,
    controller: InteractionController,
    renderer: GridRenderer,
    marker: MarkerState,
    game: TargetGame,
    timers: TimerQueue<GameTask>,
    surface: S,
    status: T,
}

impl<S: Surface, T: StatusSink> PlotterWidget<S, T> {
    /// Build a widget and show its first target.
    ///
    /// Nothing is drawn or written if the grid config is invalid.
    pub fn new(config: PlotterConfig, seed: u64, surface: S, status: T) -> Result<Self, ConfigError> {
        let PlotterConfig {
            grid,
            interaction,
            game,
        } = config;
        let game = TargetGame::new(game, &grid, seed)?;
        let mut widget = Self {
            mapper: CoordinateMapper::new(grid)?,
            controller: InteractionController::new(&interaction),
            renderer: GridRenderer,
            marker: MarkerState::default(),
            game,
            timers: TimerQueue::new(),
            surface,
            status,
        };
        widget.new_target();
        Ok(widget)
    }

    #[inline]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    #[inline]
    pub fn marker(&self) -> MarkerState {
        self.marker
    }

    #[inline]
    pub fn target(&self) -> GridCoordinate {
        self.game.target()
    }

    #[inline]
    pub fn result_text(&self) -> &'static str {
        self.game.result_text()
    }

    #[inline]
    pub fn timers(&self) -> &TimerQueue<GameTask> {
        &self.timers
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn status(&self) -> &T {
        &self.status
    }

    /// Pin the target to a fixed point and refresh the target text.
    pub fn set_target(&mut self, coordinate: GridCoordinate) {
        self.game.set_target(coordinate);
        self.status.show_target(&self.game.target_text());
    }

    pub fn redraw(&mut self) {
        self.renderer.render(&self.mapper, &self.marker, &mut self.surface);
    }

    pub fn handle_pointer(&mut self, input: PointerInput) {
        if self.controller.handle(&self.mapper, &mut self.marker, input) {
            self.redraw();
        }
    }

    pub fn pointer_down(&mut self, canvas_px: Vec2) {
        self.handle_pointer(PointerInput::Down(canvas_px));
    }

    pub fn pointer_move(&mut self, canvas_px: Vec2) {
        self.handle_pointer(PointerInput::Move(canvas_px));
    }

    pub fn pointer_up(&mut self) {
        self.handle_pointer(PointerInput::Up);
    }

    pub fn pointer_leave(&mut self) {
        self.handle_pointer(PointerInput::Leave);
    }

    pub fn new_target(&mut self) {
        self.game.new_target(&mut self.marker, &mut self.timers);
        self.status.show_result(self.game.result_text());
        self.status.show_target(&self.game.target_text());
        self.redraw();
    }

    /// Compare the marker with the target. On success the returned outcome
    /// carries the reroll timer the host has to arm.
    pub fn check(&mut self) -> CheckOutcome {
        let outcome = self.game.check(&self.marker, &mut self.timers);
        self.status.show_result(self.game.result_text());
        outcome
    }

    /// Advance virtual time, running whatever came due.
    pub fn advance(&mut self, dt: Duration) {
        for task in self.timers.advance(dt) {
            self.run(task);
        }
    }

    /// Run a timer the host armed, if it is still pending.
    pub fn fire(&mut self, handle: TimerHandle) {
        if let Some(task) = self.timers.fire(handle) {
            self.run(task);
        }
    }

    fn run(&mut self, task: GameTask) {
        match task {
            GameTask::NewTarget => self.new_target(),
        }
    }
}
