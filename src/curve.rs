//! Rate curve sampling and export
//!
//! Samples `(step, rate)` pairs from schedules and writes them as comparison
//! tables, the shape consumed by downstream plotting and reporting.

use crate::schedule::{RateSchedule, Schedule};
use serde::Serialize;
use std::io::{self, Write};

/// A single sampled point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatePoint {
    /// Optimization step
    pub step: usize,
    /// Learning rate at that step
    pub rate: f32,
}

/// A sampled schedule, labeled for reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateCurve {
    /// Label from the sweep specification
    pub name: String,
    /// Points sampled every `stride` steps, last point at the horizon
    pub points: Vec<RatePoint>,
}

/// Summary statistics of a sampled curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveSummary {
    /// Rate at step 0
    pub initial: f32,
    /// Largest sampled rate
    pub peak: f32,
    /// Rate at the sampling horizon
    pub terminal: f32,
    /// Mean of the sampled rates
    pub mean: f32,
}

impl RateCurve {
    /// Sample a schedule from step 0 to `total_steps` inclusive, every
    /// `stride` steps. The horizon is always included so the terminal value
    /// shows up even when `total_steps` is not a multiple of `stride`.
    pub fn sample(
        name: impl Into<String>,
        schedule: &Schedule,
        total_steps: usize,
        stride: usize,
    ) -> Self {
        debug_assert!(stride > 0);
        let mut points: Vec<RatePoint> = (0..=total_steps)
            .step_by(stride.max(1))
            .map(|step| RatePoint { step, rate: schedule.rate_at(step) })
            .collect();
        if points.last().map(|p| p.step) != Some(total_steps) {
            points.push(RatePoint { step: total_steps, rate: schedule.rate_at(total_steps) });
        }
        Self { name: name.into(), points }
    }

    /// Summary statistics over the sampled points
    pub fn summary(&self) -> CurveSummary {
        let initial = self.points.first().map_or(0.0, |p| p.rate);
        let terminal = self.points.last().map_or(0.0, |p| p.rate);
        let peak = self.points.iter().map(|p| p.rate).fold(0.0f32, f32::max);
        let sum: f64 = self.points.iter().map(|p| f64::from(p.rate)).sum();
        let mean = if self.points.is_empty() {
            0.0
        } else {
            (sum / self.points.len() as f64) as f32
        };
        CurveSummary { initial, peak, terminal, mean }
    }
}

/// Write curves as a side-by-side CSV table: one `step` column followed by
/// one column per curve. All curves must share the same sampling grid, which
/// `RateCurve::sample` guarantees for a fixed horizon and stride.
pub fn write_csv<W: Write>(writer: &mut W, curves: &[RateCurve]) -> io::Result<()> {
    let Some(first) = curves.first() else {
        return Ok(());
    };
    if curves.iter().any(|c| {
        c.points.len() != first.points.len()
            || c.points.iter().zip(&first.points).any(|(a, b)| a.step != b.step)
    }) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "curves sampled on different step grids",
        ));
    }

    write!(writer, "step")?;
    for curve in curves {
        write!(writer, ",{}", curve.name)?;
    }
    writeln!(writer)?;

    for i in 0..first.points.len() {
        write!(writer, "{}", first.points[i].step)?;
        for curve in curves {
            write!(writer, ",{}", curve.points[i].rate)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write curves as a long CSV table: one `step,name,rate` row per sampled
/// point. Unlike [`write_csv`] this makes no assumption about the sampling
/// grids, so curves of different strides can share one file.
pub fn write_csv_long<W: Write>(writer: &mut W, curves: &[RateCurve]) -> io::Result<()> {
    writeln!(writer, "step,name,rate")?;
    for curve in curves {
        for point in &curve.points {
            writeln!(writer, "{},{},{}", point.step, curve.name, point.rate)?;
        }
    }
    Ok(())
}

/// Write curves as a JSON array of labeled point lists
pub fn write_json<W: Write>(writer: &mut W, curves: &[RateCurve]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, curves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{ConstantLR, LinearDecayLR, WarmupCosineLR};
    use approx::assert_abs_diff_eq;

    fn linear(base: f32, total: usize) -> Schedule {
        Schedule::Linear(LinearDecayLR::new(base, total).unwrap())
    }

    #[test]
    fn test_sample_includes_horizon() {
        let curve = RateCurve::sample("lin", &linear(1.0, 100), 100, 33);
        let steps: Vec<usize> = curve.points.iter().map(|p| p.step).collect();
        assert_eq!(steps, vec![0, 33, 66, 99, 100]);
    }

    #[test]
    fn test_sample_stride_one() {
        let curve = RateCurve::sample("lin", &linear(1.0, 10), 10, 1);
        assert_eq!(curve.points.len(), 11);
        assert_abs_diff_eq!(curve.points[5].rate, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_summary_statistics() {
        let schedule =
            Schedule::WarmupCosine(WarmupCosineLR::new(0.1, 0.0, 100, 1000).unwrap());
        let summary = RateCurve::sample("cos", &schedule, 1000, 10).summary();
        assert_abs_diff_eq!(summary.initial, 0.0, epsilon = 1e-7);
        assert_abs_diff_eq!(summary.peak, 0.1, epsilon = 1e-6);
        assert_abs_diff_eq!(summary.terminal, 0.0, epsilon = 1e-6);
        assert!(summary.mean > 0.0 && summary.mean < 0.1);
    }

    #[test]
    fn test_csv_wide_format() {
        let a = RateCurve::sample("a", &linear(1.0, 4), 4, 2);
        let b = RateCurve::sample("b", &Schedule::Constant(ConstantLR::new(0.5).unwrap()), 4, 2);

        let mut out = Vec::new();
        write_csv(&mut out, &[a, b]).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("step,a,b"));
        assert_eq!(lines.next(), Some("0,1,0.5"));
        assert_eq!(lines.next(), Some("2,0.5,0.5"));
        assert_eq!(lines.next(), Some("4,0,0.5"));
    }

    #[test]
    fn test_csv_rejects_mismatched_grids() {
        let a = RateCurve::sample("a", &linear(1.0, 100), 100, 10);
        let b = RateCurve::sample("b", &linear(1.0, 100), 100, 20);

        let mut out = Vec::new();
        assert!(write_csv(&mut out, &[a, b]).is_err());
    }

    #[test]
    fn test_csv_long_format() {
        let a = RateCurve::sample("a", &linear(1.0, 4), 4, 2);
        let b = RateCurve::sample("b", &Schedule::Constant(ConstantLR::new(0.5).unwrap()), 4, 2);

        let mut out = Vec::new();
        write_csv_long(&mut out, &[a, b]).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "step,name,rate");
        assert_eq!(lines[1], "0,a,1");
        assert_eq!(lines[3], "4,a,0");
        assert_eq!(lines[4], "0,b,0.5");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_csv_long_accepts_mismatched_grids() {
        let a = RateCurve::sample("a", &linear(1.0, 100), 100, 10);
        let b = RateCurve::sample("b", &linear(1.0, 100), 100, 20);

        let mut out = Vec::new();
        write_csv_long(&mut out, &[a, b]).unwrap();
        // 11 + 6 points plus the header
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 18);
    }

    #[test]
    fn test_json_output_is_labeled() {
        let curve = RateCurve::sample("lin", &linear(1.0, 10), 10, 5);
        let mut out = Vec::new();
        write_json(&mut out, &[curve]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["name"], "lin");
        assert_eq!(value[0]["points"][0]["step"], 0);
    }
}
