//! Schedule configuration error types

use thiserror::Error;

/// Errors rejected at schedule construction
///
/// Invalid parameters fail fast; they are never silently clamped. Out-of-range
/// steps at query time are not errors: past `total_steps` every schedule holds
/// its terminal value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("Invalid base rate: {0} (must be > 0.0)")]
    InvalidBaseRate(f32),

    #[error("Invalid rate bounds: min {min} > max {max}")]
    RateBoundsReversed { min: f32, max: f32 },

    #[error("Invalid minimum rate: {0} (must be >= 0.0)")]
    NegativeMinRate(f32),

    #[error("Invalid decay factor: {0} (must be in (0.0, 1.0])")]
    InvalidDecayFactor(f32),

    #[error("Invalid total steps: 0 (must be > 0)")]
    ZeroTotalSteps,

    #[error("Warmup steps {warmup} exceed total steps {total}")]
    WarmupExceedsTotal { warmup: usize, total: usize },

    #[error("Invalid step size: 0 (must be > 0)")]
    ZeroStepSize,

    #[error("Invalid cycle length: 0 (must be > 0)")]
    ZeroCycleLength,

    #[error("Invalid cycle multiplier: {0} (must be >= 1)")]
    InvalidCycleMult(u32),

    #[error("Milestones must be non-empty and strictly increasing")]
    InvalidMilestones,

    #[error("Invalid power: {0} (must be > 0.0)")]
    InvalidPower(f32),

    #[error("Invalid pct_start: {0} (must be in (0.0, 1.0))")]
    InvalidPctStart(f32),

    #[error("Invalid final rate: {0} (must be >= 0.0 and <= max_rate)")]
    InvalidFinalRate(f32),

    #[error("Invalid amplitude decay: {0} (must be in (0.0, 1.0])")]
    InvalidAmplitudeDecay(f32),
}

/// Result type for schedule construction
pub type Result<T> = std::result::Result<T, ScheduleError>;
