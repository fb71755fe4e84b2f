//! One-cycle learning rate schedule

use super::error::{Result, ScheduleError};
use super::RateSchedule;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

fn default_pct_start() -> f32 {
    0.3
}

/// Shape of the one-cycle cooldown phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnealStrategy {
    /// Cosine cooldown from the peak to the floor
    #[default]
    Cosine,
    /// Linear cooldown from the peak to the floor
    Linear,
}

/// One-Cycle Learning Rate
///
/// Two phases over `total_steps`:
/// - Ramp: linear increase from `min_rate` to `max_rate` over the first
///   `pct_start` fraction of steps
/// - Cooldown: anneal (cosine or linear) from `max_rate` down to
///   `final_rate`, which defaults to `min_rate`
///
/// The two phase formulas agree exactly at the boundary step, so the curve
/// is continuous. Past `total_steps` the schedule holds at the floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneCycleLR {
    /// Starting learning rate
    pub min_rate: f32,
    /// Peak learning rate, reached at the end of the ramp
    pub max_rate: f32,
    /// Total schedule length
    pub total_steps: usize,
    /// Fraction of `total_steps` spent ramping up, in (0, 1)
    #[serde(default = "default_pct_start")]
    pub pct_start: f32,
    /// Cooldown shape
    #[serde(default)]
    pub anneal: AnnealStrategy,
    /// Terminal floor; defaults to `min_rate` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_rate: Option<f32>,
}

impl OneCycleLR {
    /// Create a one-cycle schedule with a cosine cooldown
    pub fn new(min_rate: f32, max_rate: f32, total_steps: usize, pct_start: f32) -> Result<Self> {
        let schedule = Self {
            min_rate,
            max_rate,
            total_steps,
            pct_start,
            anneal: AnnealStrategy::Cosine,
            final_rate: None,
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
        if self.total_steps == 0 {
            return Err(ScheduleError::ZeroTotalSteps);
        }
        if self.pct_start <= 0.0 || self.pct_start >= 1.0 {
            return Err(ScheduleError::InvalidPctStart(self.pct_start));
        }
        if let Some(final_rate) = self.final_rate {
            if final_rate < 0.0 || final_rate > self.max_rate {
                return Err(ScheduleError::InvalidFinalRate(final_rate));
            }
        }
        Ok(())
    }

    /// Number of ramp-up steps; always at least 1 and less than `total_steps`
    pub fn ramp_steps(&self) -> usize {
        let ramp = (self.total_steps as f64 * self.pct_start as f64).round() as usize;
        ramp.clamp(1, self.total_steps.saturating_sub(1).max(1))
    }

    fn floor_rate(&self) -> f32 {
        self.final_rate.unwrap_or(self.min_rate)
    }
}

impl RateSchedule for OneCycleLR {
    fn rate_at(&self, step: usize) -> f32 {
        let ramp = self.ramp_steps();
        if step < ramp {
            return self.min_rate + (self.max_rate - self.min_rate) * step as f32 / ramp as f32;
        }

        let cooldown = self.total_steps.saturating_sub(ramp);
        if cooldown == 0 {
            return self.floor_rate();
        }
        let done = (step - ramp).min(cooldown);
        let progress = done as f32 / cooldown as f32;
        let floor = self.floor_rate();
        match self.anneal {
            AnnealStrategy::Cosine => {
                floor + 0.5 * (self.max_rate - floor) * (1.0 + (PI * progress).cos())
            }
            AnnealStrategy::Linear => self.max_rate - (self.max_rate - floor) * progress,
        }
    }
}
