//! Polynomial decay learning rate schedule

use super::error::{Result, ScheduleError};
use super::RateSchedule;
use serde::{Deserialize, Serialize};

fn default_power() -> f32 {
    1.0
}

/// Polynomial Decay Learning Rate
///
/// Decays from `base_rate` to `end_rate` following a polynomial of the
/// configured power. Power 1.0 is linear decay with a floor; 2.0 front-loads
/// the decay; 0.5 back-loads it.
///
/// Formula: lr_t = (base_rate - end_rate) * (1 - t / total_steps)^power + end_rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialLR {
    /// Initial learning rate
    pub base_rate: f32,
    /// Terminal learning rate
    #[serde(default)]
    pub end_rate: f32,
    /// Steps over which the rate reaches `end_rate`
    pub total_steps: usize,
    /// Polynomial power, > 0
    #[serde(default = "default_power")]
    pub power: f32,
}

impl PolynomialLR {
    /// Create a polynomial decay schedule
    pub fn new(base_rate: f32, end_rate: f32, total_steps: usize, power: f32) -> Result<Self> {
        let schedule = Self { base_rate, end_rate, total_steps, power };
        schedule.validate()?;
        Ok(schedule)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.base_rate <= 0.0 {
            return Err(ScheduleError::InvalidBaseRate(self.base_rate));
        }
        if self.end_rate < 0.0 {
            return Err(ScheduleError::NegativeMinRate(self.end_rate));
        }
        if self.end_rate > self.base_rate {
            return Err(ScheduleError::RateBoundsReversed {
                min: self.end_rate,
                max: self.base_rate,
            });
        }
        if self.total_steps == 0 {
            return Err(ScheduleError::ZeroTotalSteps);
        }
        if self.power <= 0.0 {
            return Err(ScheduleError::InvalidPower(self.power));
        }
        Ok(())
    }
}

impl RateSchedule for PolynomialLR {
    fn rate_at(&self, step: usize) -> f32 {
        let step = step.min(self.total_steps);
        let remaining = 1.0 - step as f32 / self.total_steps as f32;
        (self.base_rate - self.end_rate) * remaining.powf(self.power) + self.end_rate
    }
}
