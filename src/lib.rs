//! Recocer: learning-rate schedule benchmark library
//!
//! Compares learning-rate scheduling strategies for language-model
//! pretraining across ten schedule families. Each family maps
//! `(step, parameters) -> rate` through the pure [`RateSchedule`] contract,
//! so the training loop driving it supplies the step and applies the
//! returned rate to its optimizer.
//!
//! # Example
//!
//! ```
//! use recocer::schedule::{RateSchedule, WarmupCosineLR};
//!
//! let schedule = WarmupCosineLR::new(3e-4, 3e-5, 1000, 100_000).unwrap();
//! assert_eq!(schedule.rate_at(0), 0.0);
//! assert!((schedule.rate_at(1000) - 3e-4).abs() < 1e-9);
//! ```

pub mod cli;
pub mod config;
pub mod curve;
pub mod schedule;

pub use config::{NamedSchedule, SpecError, SweepSpec};
pub use curve::{CurveSummary, RateCurve, RatePoint};
pub use schedule::{RateSchedule, Schedule, ScheduleCursor, ScheduleError};
