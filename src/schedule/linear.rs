//! Linear decay learning rate schedule

use super::error::{Result, ScheduleError};
use super::RateSchedule;
use serde::{Deserialize, Serialize};

/// Linear Decay Learning Rate
///
/// Decays linearly from `base_rate` to zero over `total_steps`, then holds
/// at zero.
///
/// Formula: lr_t = base_rate * max(0, 1 - t / total_steps)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearDecayLR {
    /// Initial learning rate
    pub base_rate: f32,
    /// Steps over which the rate reaches zero
    pub total_steps: usize,
}

impl LinearDecayLR {
    /// Create a linear decay schedule
    pub fn new(base_rate: f32, total_steps: usize) -> Result<Self> {
        let schedule = Self { base_rate, total_steps };
        schedule.validate()?;
        Ok(schedule)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.base_rate <= 0.0 {
            return Err(ScheduleError::InvalidBaseRate(self.base_rate));
        }
        if self.total_steps == 0 {
            return Err(ScheduleError::ZeroTotalSteps);
        }
        Ok(())
    }
}

impl RateSchedule for LinearDecayLR {
    fn rate_at(&self, step: usize) -> f32 {
        if step >= self.total_steps {
            return 0.0;
        }
        self.base_rate * (1.0 - step as f32 / self.total_steps as f32)
    }
}
