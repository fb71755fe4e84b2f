//! End-to-end sweep test: YAML spec -> validate -> sample -> export

use recocer::curve::{write_csv, RateCurve};
use recocer::schedule::RateSchedule;
use recocer::{SpecError, SweepSpec};
use std::io::Write;

const SWEEP_YAML: &str = r"
total_steps: 10000
stride: 100
schedules:
  - name: baseline
    family: constant
    base_rate: 0.0003
  - name: cosine
    family: warmup_cosine
    base_rate: 0.0003
    min_rate: 0.00003
    warmup_steps: 1000
    total_steps: 10000
  - name: one_cycle
    family: one_cycle
    min_rate: 0.00003
    max_rate: 0.0003
    total_steps: 10000
    pct_start: 0.3
  - name: restarts
    family: warm_restarts
    base_rate: 0.0003
    t_0: 2000
    t_mult: 2
";

#[test]
fn sweep_loads_from_file_and_samples() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp spec");
    file.write_all(SWEEP_YAML.as_bytes()).expect("write spec");

    let spec = SweepSpec::load(file.path()).expect("load spec");
    assert_eq!(spec.schedules.len(), 4);

    let curves: Vec<RateCurve> = spec
        .schedules
        .iter()
        .map(|named| RateCurve::sample(&named.name, &named.schedule, spec.total_steps, spec.stride))
        .collect();

    // All curves share the sampling grid: 0..=10000 step 100
    for curve in &curves {
        assert_eq!(curve.points.len(), 101);
        assert_eq!(curve.points.last().unwrap().step, 10_000);
    }

    // Every sampled rate respects the configured bounds
    for (named, curve) in spec.schedules.iter().zip(&curves) {
        let peak = named.schedule.peak_rate();
        for point in &curve.points {
            assert!(point.rate >= 0.0);
            assert!(point.rate <= peak * 1.00001, "{}: {} > {}", named.name, point.rate, peak);
        }
    }
}

#[test]
fn sweep_exports_comparison_csv() {
    let spec = SweepSpec::from_yaml(SWEEP_YAML).expect("parse spec");
    let curves: Vec<RateCurve> = spec
        .schedules
        .iter()
        .map(|named| RateCurve::sample(&named.name, &named.schedule, spec.total_steps, spec.stride))
        .collect();

    let mut out = Vec::new();
    write_csv(&mut out, &curves).expect("write csv");
    let text = String::from_utf8(out).expect("utf8 csv");

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("step,baseline,cosine,one_cycle,restarts"));
    // Header plus one row per sampled step
    assert_eq!(text.lines().count(), 102);

    // The baseline column is constant all the way down
    for line in text.lines().skip(1) {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields[1], "0.0003");
    }
}

#[test]
fn sampled_rates_match_direct_queries() {
    let spec = SweepSpec::from_yaml(SWEEP_YAML).expect("parse spec");
    for named in &spec.schedules {
        let curve = RateCurve::sample(&named.name, &named.schedule, spec.total_steps, spec.stride);
        for point in &curve.points {
            assert_eq!(point.rate, named.schedule.rate_at(point.step), "{}", named.name);
        }
    }
}

#[test]
fn invalid_sweep_reports_offending_schedule() {
    let yaml = r"
total_steps: 1000
schedules:
  - name: good
    family: constant
    base_rate: 0.001
  - name: bad
    family: warmup_cosine
    base_rate: 0.001
    warmup_steps: 2000
    total_steps: 1000
";
    match SweepSpec::from_yaml(yaml) {
        Err(SpecError::InvalidSchedule { name, .. }) => assert_eq!(name, "bad"),
        other => panic!("expected InvalidSchedule, got {other:?}"),
    }
}

#[test]
fn missing_spec_file_is_an_io_error() {
    assert!(matches!(
        SweepSpec::load("/nonexistent/sweep.yaml"),
        Err(SpecError::Io(_))
    ));
}
