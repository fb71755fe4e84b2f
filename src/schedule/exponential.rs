//! Exponential decay learning rate schedule

use super::error::{Result, ScheduleError};
use super::RateSchedule;
use serde::{Deserialize, Serialize};

/// Exponential Decay Learning Rate
///
/// Multiplies the rate by gamma every step.
///
/// Formula: lr_t = base_rate * gamma^t
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExponentialLR {
    /// Initial learning rate
    pub base_rate: f32,
    /// Per-step multiplicative decay factor
    pub gamma: f32,
}

impl ExponentialLR {
    /// Create an exponential decay schedule
    pub fn new(base_rate: f32, gamma: f32) -> Result<Self> {
        let schedule = Self { base_rate, gamma };
        schedule.validate()?;
        Ok(schedule)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.base_rate <= 0.0 {
            return Err(ScheduleError::InvalidBaseRate(self.base_rate));
        }
        if self.gamma <= 0.0 || self.gamma > 1.0 {
            return Err(ScheduleError::InvalidDecayFactor(self.gamma));
        }
        Ok(())
    }
}

impl RateSchedule for ExponentialLR {
    fn rate_at(&self, step: usize) -> f32 {
        // powf rather than powi: step counts routinely exceed i32 exponents
        // long after the rate has underflowed to zero
        self.base_rate * self.gamma.powf(step as f32)
    }
}
