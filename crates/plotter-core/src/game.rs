//! The "find the point" game: a random target, an explicit check, and a
//! delayed reroll after a correct answer.

use crate::config::{GameConfig, GridConfig};
use crate::error::ConfigError;
use crate::grid::GridCoordinate;
use crate::marker::MarkerState;
use crate::timer::{ScheduledTimer, TimerHandle, TimerQueue};
use rand::prelude::*;

/// Work the game defers onto the timer queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameTask {
    NewTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetState {
    pub coordinate: GridCoordinate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// `timer` is the newly armed reroll, or `None` when one was already pending.
    Correct { timer: Option<ScheduledTimer> },
    Incorrect,
}

impl CheckOutcome {
    #[inline]
    pub fn is_correct(&self) -> bool {
        matches!(self, CheckOutcome::Correct { .. })
    }
}

pub struct TargetGame {
    config: GameConfig,
    min: i32,
    max: i32,
    rng: StdRng,
    target: TargetState,
    result: &'static str,
    pending: Option<TimerHandle>,
}

impl TargetGame {
    /// Fails if the grid range is empty, since no target could be rolled.
    pub fn new(config: GameConfig, grid: &GridConfig, seed: u64) -> Result<Self, ConfigError> {
        grid.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let coordinate = random_coordinate(&mut rng, grid.min, grid.max);
        Ok(Self {
            config,
            min: grid.min,
            max: grid.max,
            rng,
            target: TargetState { coordinate },
            result: "",
            pending: None,
        })
    }

    #[inline]
    pub fn target(&self) -> GridCoordinate {
        self.target.coordinate
    }

    /// Current result line: empty, the success message or the retry message.
    #[inline]
    pub fn result_text(&self) -> &'static str {
        self.result
    }

    /// `Target: (x, y)`
    pub fn target_text(&self) -> String {
        format!("Target: {}", self.target.coordinate)
    }

    /// The armed reroll, if any.
    #[inline]
    pub fn pending_reroll(&self) -> Option<TimerHandle> {
        self.pending
    }

    /// Replace the target with a fixed point, clamped into the grid range.
    pub fn set_target(&mut self, coordinate: GridCoordinate) {
        self.target.coordinate = coordinate.clamped(self.min, self.max);
    }

    /// Roll a fresh target and put the board back to its starting state.
    ///
    /// Cancels a still-pending reroll so a manual call never leaves a second
    /// one queued behind it.
    pub fn new_target(&mut self, marker: &mut MarkerState, timers: &mut TimerQueue<GameTask>) {
        if let Some(h) = self.pending.take() {
            timers.cancel(h);
        }
        self.target.coordinate = random_coordinate(&mut self.rng, self.min, self.max);
        marker.reset();
        self.result = "";
        log::info!("[game] new target {}", self.target.coordinate);
    }

    pub fn check(&mut self, marker: &MarkerState, timers: &mut TimerQueue<GameTask>) -> CheckOutcome {
        if marker.position != self.target.coordinate {
            self.result = self.config.retry_message;
            log::info!("[game] {} is not {}", marker.position, self.target.coordinate);
            return CheckOutcome::Incorrect;
        }

        self.result = self.config.success_message;
        log::info!("[game] hit target {}", self.target.coordinate);

        if let Some(h) = self.pending {
            if timers.is_pending(h) {
                return CheckOutcome::Correct { timer: None };
            }
        }
        let delay = self.config.success_delay;
        let handle = timers.schedule(delay, GameTask::NewTarget);
        self.pending = Some(handle);
        CheckOutcome::Correct {
            timer: Some(ScheduledTimer { handle, delay }),
        }
    }
}

/// Uniform over `[min, max]` on each axis independently.
pub fn random_coordinate<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> GridCoordinate {
    GridCoordinate::new(rng.gen_range(min..=max), rng.gen_range(min..=max))
}
