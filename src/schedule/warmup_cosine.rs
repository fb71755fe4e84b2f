//! Warmup + cosine decay learning rate schedule

use super::error::{Result, ScheduleError};
use super::RateSchedule;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Warmup + Cosine Decay Learning Rate
///
/// The schedule used by most LM pretraining recipes.
/// - Phase 1 (warmup): linear increase from 0 to `base_rate`
/// - Phase 2 (decay): cosine decay from `base_rate` to `min_rate`
///
/// Past `total_steps` the schedule holds at `min_rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmupCosineLR {
    /// Peak learning rate, reached at the end of warmup
    pub base_rate: f32,
    /// Terminal learning rate
    #[serde(default)]
    pub min_rate: f32,
    /// Number of linear warmup steps
    pub warmup_steps: usize,
    /// Total schedule length, including warmup
    pub total_steps: usize,
}

impl WarmupCosineLR {
    /// Create a warmup + cosine decay schedule
    ///
    /// # Arguments
    /// * `base_rate` - Peak learning rate (after warmup)
    /// * `min_rate` - Terminal learning rate (at `total_steps`)
    /// * `warmup_steps` - Number of warmup steps
    /// * `total_steps` - Total schedule length, including warmup
    pub fn new(
        base_rate: f32,
        min_rate: f32,
        warmup_steps: usize,
        total_steps: usize,
    ) -> Result<Self> {
        let schedule = Self { base_rate, min_rate, warmup_steps, total_steps };
        schedule.validate()?;
        Ok(schedule)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.base_rate <= 0.0 {
            return Err(ScheduleError::InvalidBaseRate(self.base_rate));
        }
        if self.min_rate < 0.0 {
            return Err(ScheduleError::NegativeMinRate(self.min_rate));
        }
        if self.min_rate > self.base_rate {
            return Err(ScheduleError::RateBoundsReversed {
                min: self.min_rate,
                max: self.base_rate,
            });
        }
        if self.total_steps == 0 {
            return Err(ScheduleError::ZeroTotalSteps);
        }
        if self.warmup_steps > self.total_steps {
            return Err(ScheduleError::WarmupExceedsTotal {
                warmup: self.warmup_steps,
                total: self.total_steps,
            });
        }
        Ok(())
    }
}

impl RateSchedule for WarmupCosineLR {
    fn rate_at(&self, step: usize) -> f32 {
        if step < self.warmup_steps {
            // Warmup phase: linear increase
            return self.base_rate * step as f32 / self.warmup_steps as f32;
        }

        let decay_steps = self.total_steps - self.warmup_steps;
        if decay_steps == 0 {
            return self.min_rate;
        }

        let decay_step = step - self.warmup_steps;
        if decay_step >= decay_steps {
            return self.min_rate;
        }

        let progress = decay_step as f32 / decay_steps as f32;
        let cosine_decay = 0.5 * (1.0 + (PI * progress).cos());
        self.min_rate + (self.base_rate - self.min_rate) * cosine_decay
    }
}
