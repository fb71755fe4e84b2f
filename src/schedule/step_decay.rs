//! Step decay learning rate schedule

use super::error::{Result, ScheduleError};
use super::RateSchedule;
use serde::{Deserialize, Serialize};

/// Step Decay Learning Rate
///
/// Multiplies the rate by gamma every `step_size` steps.
///
/// Formula: lr_t = base_rate * gamma^floor(t / step_size)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDecayLR {
    /// Initial learning rate
    pub base_rate: f32,
    /// Number of steps between decays
    pub step_size: usize,
    /// Multiplicative decay factor (e.g. 0.1 for a 10x reduction)
    pub gamma: f32,
}

impl StepDecayLR {
    /// Create a step decay schedule
    ///
    /// # Arguments
    /// * `base_rate` - Initial learning rate
    /// * `step_size` - Decay the rate every `step_size` steps
    /// * `gamma` - Multiplicative factor in (0, 1]
    pub fn new(base_rate: f32, step_size: usize, gamma: f32) -> Result<Self> {
        let schedule = Self { base_rate, step_size, gamma };
        schedule.validate()?;
        Ok(schedule)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.base_rate <= 0.0 {
            return Err(ScheduleError::InvalidBaseRate(self.base_rate));
        }
        if self.step_size == 0 {
            return Err(ScheduleError::ZeroStepSize);
        }
        if self.gamma <= 0.0 || self.gamma > 1.0 {
            return Err(ScheduleError::InvalidDecayFactor(self.gamma));
        }
        Ok(())
    }
}

impl RateSchedule for StepDecayLR {
    fn rate_at(&self, step: usize) -> f32 {
        let num_decays = step / self.step_size;
        // powf rather than powi: the decay count can exceed i32 exponents
        // long after the rate has underflowed to zero
        self.base_rate * self.gamma.powf(num_decays as f32)
    }
}
