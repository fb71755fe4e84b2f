//! Step cursor driving a schedule through a training run

use super::{RateSchedule, Schedule};

/// Step cursor owned by the training loop
///
/// Wraps a schedule with the current step count. The cursor holds no other
/// state: the rate at any point is recomputed from the step, so seeking to a
/// checkpointed step resumes the schedule exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleCursor {
    schedule: Schedule,
    step: usize,
}

impl ScheduleCursor {
    /// Create a cursor at step 0
    pub fn new(schedule: Schedule) -> Self {
        Self { schedule, step: 0 }
    }

    /// Learning rate at the current step
    pub fn get_lr(&self) -> f32 {
        self.schedule.rate_at(self.step)
    }

    /// Advance by one optimization step
    pub fn step(&mut self) {
        self.step += 1;
    }

    /// Jump to an arbitrary step, e.g. when resuming from a checkpoint
    pub fn seek(&mut self, step: usize) {
        self.step = step;
    }

    /// Current step count
    pub fn current_step(&self) -> usize {
        self.step
    }

    /// The schedule being driven
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}
