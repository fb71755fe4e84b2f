//! Declarative sweep specification
//!
//! A sweep is a named list of schedules plus a sampling horizon, loaded from
//! YAML:
//!
//! ```yaml
//! total_steps: 100000
//! stride: 100
//! schedules:
//!   - name: cosine
//!     family: warmup_cosine
//!     base_rate: 3.0e-4
//!     min_rate: 3.0e-5
//!     warmup_steps: 1000
//!     total_steps: 100000
//!   - name: baseline
//!     family: constant
//!     base_rate: 3.0e-4
//! ```

use crate::schedule::{Schedule, ScheduleError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

fn default_stride() -> usize {
    1
}

/// Errors loading or validating a sweep specification
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("Failed to read spec file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse spec file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Sweep contains no schedules")]
    Empty,

    #[error("Duplicate schedule name: {0}")]
    DuplicateName(String),

    #[error("Schedule '{name}' is invalid: {source}")]
    InvalidSchedule {
        name: String,
        #[source]
        source: ScheduleError,
    },

    #[error("Invalid sampling horizon: 0 (must be > 0)")]
    ZeroHorizon,

    #[error("Invalid sampling stride: 0 (must be > 0)")]
    ZeroStride,
}

/// A schedule labeled for reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSchedule {
    /// Label used in curve output
    pub name: String,

    /// The schedule parameters, tagged by `family`
    #[serde(flatten)]
    pub schedule: Schedule,
}

/// Complete sweep specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSpec {
    /// Schedules to compare
    pub schedules: Vec<NamedSchedule>,

    /// Sampling horizon in optimization steps
    pub total_steps: usize,

    /// Sample every `stride` steps
    #[serde(default = "default_stride")]
    pub stride: usize,
}

impl SweepSpec {
    /// Parse a sweep from YAML and validate it
    pub fn from_yaml(yaml: &str) -> Result<Self, SpecError> {
        let spec: Self = serde_yaml::from_str(yaml)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Load a sweep from a YAML file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Check the sweep and every schedule in it, fail-fast on the first error
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.schedules.is_empty() {
            return Err(SpecError::Empty);
        }
        if self.total_steps == 0 {
            return Err(SpecError::ZeroHorizon);
        }
        if self.stride == 0 {
            return Err(SpecError::ZeroStride);
        }

        let mut seen = HashSet::new();
        for named in &self.schedules {
            if !seen.insert(named.name.as_str()) {
                return Err(SpecError::DuplicateName(named.name.clone()));
            }
            named.schedule.validate().map_err(|source| SpecError::InvalidSchedule {
                name: named.name.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
