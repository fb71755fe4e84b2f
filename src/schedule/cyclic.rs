//! Cyclic learning rate schedule

use super::error::{Result, ScheduleError};
use super::RateSchedule;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

fn default_amplitude_decay() -> f32 {
    1.0
}

/// Shape of each oscillation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleMode {
    /// Linear rise and fall
    #[default]
    Triangular,
    /// Smooth sinusoidal rise and fall
    Cosine,
}

/// Cyclic Learning Rate
///
/// Oscillates between `min_rate` and `max_rate` with a full period of
/// `cycle_length` steps, starting and ending each cycle at `min_rate` with
/// the peak at mid-cycle. `amplitude_decay` < 1 shrinks the peak after each
/// completed cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyclicLR {
    /// Lower rate bound
    pub min_rate: f32,
    /// Upper rate bound of the first cycle
    pub max_rate: f32,
    /// Full oscillation period in steps
    pub cycle_length: usize,
    /// Oscillation shape
    #[serde(default)]
    pub mode: CycleMode,
    /// Per-cycle amplitude scale factor, in (0, 1]
    #[serde(default = "default_amplitude_decay")]
    pub amplitude_decay: f32,
}

impl CyclicLR {
    /// Create a triangular cyclic schedule without amplitude decay
    pub fn new(min_rate: f32, max_rate: f32, cycle_length: usize) -> Result<Self> {
        let schedule = Self {
            min_rate,
            max_rate,
            cycle_length,
            mode: CycleMode::Triangular,
            amplitude_decay: 1.0,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.min_rate < 0.0 {
            return Err(ScheduleError::NegativeMinRate(self.min_rate));
        }
        if self.max_rate <= 0.0 {
            return Err(ScheduleError::InvalidBaseRate(self.max_rate));
        }
        if self.min_rate > self.max_rate {
            return Err(ScheduleError::RateBoundsReversed {
                min: self.min_rate,
                max: self.max_rate,
            });
        }
        if self.cycle_length == 0 {
            return Err(ScheduleError::ZeroCycleLength);
        }
        if self.amplitude_decay <= 0.0 || self.amplitude_decay > 1.0 {
            return Err(ScheduleError::InvalidAmplitudeDecay(self.amplitude_decay));
        }
        Ok(())
    }
}

impl RateSchedule for CyclicLR {
    fn rate_at(&self, step: usize) -> f32 {
        let cycle = step / self.cycle_length;
        let position = (step % self.cycle_length) as f32 / self.cycle_length as f32;
        let shape = match self.mode {
            CycleMode::Triangular => 1.0 - (2.0 * position - 1.0).abs(),
            CycleMode::Cosine => 0.5 * (1.0 - (2.0 * PI * position).cos()),
        };
        // powf rather than powi: the cycle count is unbounded and must not
        // wrap through an i32 exponent
        let amplitude =
            (self.max_rate - self.min_rate) * self.amplitude_decay.powf(cycle as f32);
        self.min_rate + amplitude * shape
    }
}
