//! Cosine annealing with warm restarts

use super::error::{Result, ScheduleError};
use super::RateSchedule;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

fn default_t_mult() -> u32 {
    1
}

/// Position of a global step within the restart cycle structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclePosition {
    /// Zero-based index of the cycle containing the step
    pub cycle: usize,
    /// Step offset from the start of that cycle
    pub local_step: usize,
    /// Length of that cycle in steps
    pub cycle_len: usize,
}

/// Cosine Annealing with Warm Restarts
///
/// Cosine decay from `base_rate` to `min_rate` within each cycle, jumping
/// back to `base_rate` at every cycle boundary. The first cycle is `t_0`
/// steps; each subsequent cycle is `t_mult` times the previous one.
///
/// The cycle containing a step is found by walking the geometric series of
/// cycle lengths (a handful of iterations, since lengths grow geometrically),
/// so rates at arbitrary steps are computed without replaying history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmRestartsLR {
    /// Rate at the start of every cycle
    pub base_rate: f32,
    /// Rate approached at the end of every cycle
    #[serde(default)]
    pub min_rate: f32,
    /// Length of the first cycle in steps
    pub t_0: usize,
    /// Cycle length multiplier applied after each restart
    #[serde(default = "default_t_mult")]
    pub t_mult: u32,
}

impl WarmRestartsLR {
    /// Create a warm-restart schedule
    ///
    /// # Arguments
    /// * `base_rate` - Rate at the start of every cycle
    /// * `min_rate` - Rate approached at the end of every cycle
    /// * `t_0` - Length of the first cycle in steps
    /// * `t_mult` - Cycle length multiplier, >= 1
    pub fn new(base_rate: f32, min_rate: f32, t_0: usize, t_mult: u32) -> Result<Self> {
        let schedule = Self { base_rate, min_rate, t_0, t_mult };
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
        if self.t_0 == 0 {
            return Err(ScheduleError::ZeroCycleLength);
        }
        if self.t_mult < 1 {
            return Err(ScheduleError::InvalidCycleMult(self.t_mult));
        }
        Ok(())
    }

    /// Locate the cycle a global step falls into
    pub fn cycle_at(&self, step: usize) -> CyclePosition {
        if self.t_mult <= 1 {
            return CyclePosition {
                cycle: step / self.t_0,
                local_step: step % self.t_0,
                cycle_len: self.t_0,
            };
        }

        let mult = self.t_mult as usize;
        let mut cycle = 0;
        let mut cycle_start: usize = 0;
        let mut cycle_len = self.t_0;
        // checked_add: once cycle_len saturates at usize::MAX the cycle end
        // is unrepresentable, so the step lies in the current cycle
        while let Some(cycle_end) = cycle_start.checked_add(cycle_len) {
            if step < cycle_end {
                break;
            }
            cycle_start = cycle_end;
            cycle_len = cycle_len.saturating_mul(mult);
            cycle += 1;
        }
        CyclePosition { cycle, local_step: step - cycle_start, cycle_len }
    }
}

impl RateSchedule for WarmRestartsLR {
    fn rate_at(&self, step: usize) -> f32 {
        let pos = self.cycle_at(step);
        let progress = pos.local_step as f32 / pos.cycle_len as f32;
        let cosine_decay = 0.5 * (1.0 + (PI * progress).cos());
        self.min_rate + (self.base_rate - self.min_rate) * cosine_decay
    }
}
