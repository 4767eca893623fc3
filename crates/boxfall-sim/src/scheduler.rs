//! Fixed-timestep scheduler.
//!
//! Converts host frame timestamps into a whole number of equal-length
//! simulation steps using a time accumulator. A slow host frame yields
//! several catch-up steps, never one oversized step.
//!
//! Two states: running and paused. While paused, frames are ignored and
//! the accumulator is kept. Resuming restarts the clock at the resume
//! instant, so time spent paused is never simulated.

use boxfall_core::constants::MIN_FRAME_TIME_MS;
use boxfall_core::enums::LoopState;

use crate::config::SimConfig;
use crate::error::ConfigError;

/// Outcome of one host frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameAdvance {
    /// Fixed steps executed.
    pub steps: u32,
    /// Whole steps discarded by the catch-up cap.
    pub dropped: u32,
}

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    frame_time_ms: f64,
    accumulator_ms: f64,
    previous_timestamp: Option<f64>,
    state: LoopState,
    max_steps_per_frame: Option<u32>,
}

impl FixedTimestep {
    /// Fails unless `frame_time_ms` is finite and at least
    /// `MIN_FRAME_TIME_MS`, or when the cap is zero.
    pub fn new(frame_time_ms: f64, max_steps_per_frame: Option<u32>) -> Result<Self, ConfigError> {
        if !(frame_time_ms.is_finite() && frame_time_ms >= MIN_FRAME_TIME_MS) {
            return Err(ConfigError::InvalidFrameTime(frame_time_ms));
        }
        if max_steps_per_frame == Some(0) {
            return Err(ConfigError::ZeroStepCap);
        }
        Ok(Self {
            frame_time_ms,
            accumulator_ms: 0.0,
            previous_timestamp: None,
            state: LoopState::Running,
            max_steps_per_frame,
        })
    }

    pub fn from_config(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(config.frame_time_ms(), config.max_steps_per_frame)
    }

    /// Feed one host timestamp (monotonic, milliseconds) and call `step`
    /// once per whole fixed step that has accumulated.
    ///
    /// The first frame only starts the clock. A timestamp earlier than the
    /// previous one counts as zero elapsed time.
    pub fn advance<F: FnMut(f64)>(&mut self, timestamp_ms: f64, mut step: F) -> FrameAdvance {
        let mut result = FrameAdvance::default();
        if self.state == LoopState::Paused || !timestamp_ms.is_finite() {
            return result;
        }

        let delta = match self.previous_timestamp {
            Some(previous) => (timestamp_ms - previous).max(0.0),
            None => 0.0,
        };
        self.previous_timestamp = Some(timestamp_ms);
        self.accumulator_ms += delta;

        while self.accumulator_ms >= self.frame_time_ms {
            if self
                .max_steps_per_frame
                .is_some_and(|cap| result.steps >= cap)
            {
                result.dropped = self.drop_backlog();
                break;
            }
            step(self.frame_time_ms);
            self.accumulator_ms -= self.frame_time_ms;
            result.steps = result.steps.saturating_add(1);
        }

        result
    }

    /// Discard whole steps, keeping the fractional remainder.
    fn drop_backlog(&mut self) -> u32 {
        let dropped = (self.accumulator_ms / self.frame_time_ms).floor();
        self.accumulator_ms = (self.accumulator_ms - dropped * self.frame_time_ms).max(0.0);
        log::warn!(
            "simulation fell behind; dropped {} steps ({:.1} ms)",
            dropped,
            dropped * self.frame_time_ms
        );
        dropped as u32
    }

    pub fn pause(&mut self) {
        if self.state == LoopState::Paused {
            return;
        }
        self.state = LoopState::Paused;
        log::debug!("scheduler paused, {:.2} ms banked", self.accumulator_ms);
    }

    /// Resume at `now_ms`: the next frame measures from here.
    pub fn resume(&mut self, now_ms: f64) {
        if self.state == LoopState::Running {
            return;
        }
        self.state = LoopState::Running;
        self.previous_timestamp = Some(now_ms);
        log::debug!("scheduler resumed at {now_ms:.2} ms");
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frame_time_ms(&self) -> f64 {
        self.frame_time_ms
    }

    pub fn accumulator_ms(&self) -> f64 {
        self.accumulator_ms
    }
}
