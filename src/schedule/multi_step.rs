//! Multi-step decay learning rate schedule

use super::error::{Result, ScheduleError};
use super::RateSchedule;
use serde::{Deserialize, Serialize};

/// Multi-Step Decay Learning Rate
///
/// Multiplies the rate by gamma at each configured milestone.
///
/// Formula: lr_t = base_rate * gamma^k, where k = |{m in milestones : m <= t}|
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiStepLR {
    /// Initial learning rate
    pub base_rate: f32,
    /// Step indices at which the rate drops, strictly increasing
    pub milestones: Vec<usize>,
    /// Multiplicative decay factor applied at each milestone
    pub gamma: f32,
}

impl MultiStepLR {
    /// Create a multi-step schedule
    ///
    /// # Arguments
    /// * `base_rate` - Initial learning rate
    /// * `milestones` - Strictly increasing step indices for rate drops
    /// * `gamma` - Multiplicative factor in (0, 1]
    pub fn new(base_rate: f32, milestones: Vec<usize>, gamma: f32) -> Result<Self> {
        let schedule = Self { base_rate, milestones, gamma };
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
        if self.milestones.is_empty() || self.milestones.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ScheduleError::InvalidMilestones);
        }
        Ok(())
    }
}

impl RateSchedule for MultiStepLR {
    fn rate_at(&self, step: usize) -> f32 {
        let num_decays = self.milestones.iter().filter(|&&m| step >= m).count();
        self.base_rate * self.gamma.powi(num_decays as i32)
    }
}
