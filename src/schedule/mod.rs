//! Learning rate schedules
//!
//! Provides the ten schedule families compared by the benchmark:
//! - `ConstantLR` - Fixed rate for all steps
//! - `StepDecayLR` - Decay by gamma every step_size steps
//! - `MultiStepLR` - Decay by gamma at configured milestones
//! - `LinearDecayLR` - Linear decay to zero
//! - `ExponentialLR` - Decay by gamma every step
//! - `WarmupCosineLR` - Linear warmup followed by cosine decay
//! - `PolynomialLR` - Polynomial decay to an end rate
//! - `OneCycleLR` - Ramp to a peak, then anneal to a floor
//! - `WarmRestartsLR` - Cosine annealing with warm restarts
//! - `CyclicLR` - Triangular or cosine oscillation between bounds
//!
//! Every family computes its rate from the step argument alone, so a rate
//! can be queried at any step without replaying the steps before it.

mod constant;
mod cursor;
mod cyclic;
mod error;
mod exponential;
mod linear;
mod multi_step;
mod one_cycle;
mod polynomial;
mod step_decay;
mod warm_restarts;
mod warmup_cosine;

#[cfg(test)]
mod proptests;

pub use constant::ConstantLR;
pub use cursor::ScheduleCursor;
pub use cyclic::{CycleMode, CyclicLR};
pub use error::ScheduleError;
pub use exponential::ExponentialLR;
pub use linear::LinearDecayLR;
pub use multi_step::MultiStepLR;
pub use one_cycle::{AnnealStrategy, OneCycleLR};
pub use polynomial::PolynomialLR;
pub use step_decay::StepDecayLR;
pub use warm_restarts::{CyclePosition, WarmRestartsLR};
pub use warmup_cosine::WarmupCosineLR;

use serde::{Deserialize, Serialize};

/// Learning rate schedule contract
///
/// `rate_at` is pure: the result depends only on the schedule parameters and
/// the step argument. Calling it twice with the same step yields the same
/// rate, and steps may be queried in any order.
pub trait RateSchedule {
    /// Learning rate to apply at a global optimization step
    fn rate_at(&self, step: usize) -> f32;
}

/// A schedule family with its parameters
///
/// Tagged by `family` when deserialized from a sweep specification:
///
/// ```yaml
/// family: warmup_cosine
/// base_rate: 3.0e-4
/// min_rate: 3.0e-5
/// warmup_steps: 1000
/// total_steps: 100000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum Schedule {
    /// Fixed rate for all steps
    Constant(ConstantLR),
    /// Decay by gamma every step_size steps
    Step(StepDecayLR),
    /// Decay by gamma at configured milestones
    MultiStep(MultiStepLR),
    /// Linear decay to zero over total_steps
    Linear(LinearDecayLR),
    /// Decay by gamma every step
    Exponential(ExponentialLR),
    /// Linear warmup followed by cosine decay
    WarmupCosine(WarmupCosineLR),
    /// Polynomial decay to an end rate
    Polynomial(PolynomialLR),
    /// Ramp to a peak, then anneal to a floor
    OneCycle(OneCycleLR),
    /// Cosine annealing with warm restarts
    WarmRestarts(WarmRestartsLR),
    /// Oscillation between min_rate and max_rate
    Cyclic(CyclicLR),
}

impl Schedule {
    /// Check all parameters for the selected family, fail-fast on the first
    /// invalid one. Called at construction; deserialized schedules must be
    /// validated before use.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        match self {
            Schedule::Constant(s) => s.validate(),
            Schedule::Step(s) => s.validate(),
            Schedule::MultiStep(s) => s.validate(),
            Schedule::Linear(s) => s.validate(),
            Schedule::Exponential(s) => s.validate(),
            Schedule::WarmupCosine(s) => s.validate(),
            Schedule::Polynomial(s) => s.validate(),
            Schedule::OneCycle(s) => s.validate(),
            Schedule::WarmRestarts(s) => s.validate(),
            Schedule::Cyclic(s) => s.validate(),
        }
    }

    /// Family name as used in the `family` tag
    pub fn family(&self) -> &'static str {
        match self {
            Schedule::Constant(_) => "constant",
            Schedule::Step(_) => "step",
            Schedule::MultiStep(_) => "multi_step",
            Schedule::Linear(_) => "linear",
            Schedule::Exponential(_) => "exponential",
            Schedule::WarmupCosine(_) => "warmup_cosine",
            Schedule::Polynomial(_) => "polynomial",
            Schedule::OneCycle(_) => "one_cycle",
            Schedule::WarmRestarts(_) => "warm_restarts",
            Schedule::Cyclic(_) => "cyclic",
        }
    }

    /// Configured upper bound on the rate this schedule can produce
    pub fn peak_rate(&self) -> f32 {
        match self {
            Schedule::Constant(s) => s.base_rate,
            Schedule::Step(s) => s.base_rate,
            Schedule::MultiStep(s) => s.base_rate,
            Schedule::Linear(s) => s.base_rate,
            Schedule::Exponential(s) => s.base_rate,
            Schedule::WarmupCosine(s) => s.base_rate,
            Schedule::Polynomial(s) => s.base_rate,
            Schedule::OneCycle(s) => s.max_rate,
            Schedule::WarmRestarts(s) => s.base_rate,
            Schedule::Cyclic(s) => s.max_rate,
        }
    }
}

impl RateSchedule for Schedule {
    fn rate_at(&self, step: usize) -> f32 {
        match self {
            Schedule::Constant(s) => s.rate_at(step),
            Schedule::Step(s) => s.rate_at(step),
            Schedule::MultiStep(s) => s.rate_at(step),
            Schedule::Linear(s) => s.rate_at(step),
            Schedule::Exponential(s) => s.rate_at(step),
            Schedule::WarmupCosine(s) => s.rate_at(step),
            Schedule::Polynomial(s) => s.rate_at(step),
            Schedule::OneCycle(s) => s.rate_at(step),
            Schedule::WarmRestarts(s) => s.rate_at(step),
            Schedule::Cyclic(s) => s.rate_at(step),
        }
    }
}
