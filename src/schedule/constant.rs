//! Constant learning rate

use super::error::{Result, ScheduleError};
use super::RateSchedule;
use serde::{Deserialize, Serialize};

/// Constant Learning Rate
///
/// Returns `base_rate` at every step. The control arm of the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantLR {
    /// The rate applied at every step
    pub base_rate: f32,
}

impl ConstantLR {
    /// Create a constant schedule, rejecting a non-positive rate
    pub fn new(base_rate: f32) -> Result<Self> {
        let schedule = Self { base_rate };
        schedule.validate()?;
        Ok(schedule)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.base_rate <= 0.0 {
            return Err(ScheduleError::InvalidBaseRate(self.base_rate));
        }
        Ok(())
    }
}

impl RateSchedule for ConstantLR {
    fn rate_at(&self, _step: usize) -> f32 {
        self.base_rate
    }
}
