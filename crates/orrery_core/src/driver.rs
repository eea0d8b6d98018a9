//! Frame-driven animation state.
//!
//! The calculators hold no state; this driver owns the current day and a
//! play/pause flag and recomputes a full [`Frame`] from them on demand.

use crate::angle::wrap_day;
use crate::config::OrreryConfig;
use crate::error::OrreryError;
use crate::orbit::{OrbitalState, compute_position};
use crate::solar::{SolarState, solar_state};

/// Days advanced per animation frame.
pub const DEFAULT_DAY_STEP: f64 = 0.1;

/// Everything the UI needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Day of year in `[0, year_days)`.
    pub day: f64,
    pub orbit: OrbitalState,
    pub solar: SolarState,
}

/// Owns the animated day value and advances it once per tick while playing.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDriver {
    config: OrreryConfig,
    day: f64,
    day_step: f64,
    playing: bool,
}

impl AnimationDriver {
    /// Start playing from day 0 with the default step.
    pub fn new(config: OrreryConfig) -> Result<Self, OrreryError> {
        config.validate()?;
        Ok(Self {
            config,
            day: 0.0,
            day_step: DEFAULT_DAY_STEP,
            playing: true,
        })
    }

    /// Replace the per-frame day increment.
    pub fn with_day_step(mut self, day_step: f64) -> Result<Self, OrreryError> {
        if !day_step.is_finite() || day_step <= 0.0 {
            return Err(OrreryError::InvalidConfig("day_step must be positive"));
        }
        self.day_step = day_step;
        Ok(self)
    }

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn day(&self) -> f64 {
        self.day
    }

    pub fn day_step(&self) -> f64 {
        self.day_step
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Flip between playing and paused, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Jump to a day, wrapped into the year.
    pub fn seek(&mut self, day: f64) {
        self.day = wrap_day(day, self.config.year_days);
    }

    /// Advance one frame. Returns `false` without moving when paused.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let next = wrap_day(self.day + self.day_step, self.config.year_days);
        if next < self.day {
            log::debug!("animation wrapped into a new year at day {next:.3}");
        }
        log::trace!("tick: day {:.3} -> {next:.3}", self.day);
        self.day = next;
        true
    }

    /// Orbit and solar state for the current day.
    pub fn frame(&self) -> Frame {
        Frame {
            day: self.day,
            orbit: compute_position(self.day, &self.config),
            solar: solar_state(self.day, &self.config),
        }
    }

    /// Tick then return the resulting frame.
    pub fn advance(&mut self) -> Frame {
        self.tick();
        self.frame()
    }
}
