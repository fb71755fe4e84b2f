//! Property-based tests for schedule invariants

use super::*;
use proptest::prelude::*;

fn arb_schedule() -> impl Strategy<Value = Schedule> {
    let rate = 1e-6f32..1.0f32;
    prop_oneof![
        rate.clone().prop_map(|r| Schedule::Constant(ConstantLR::new(r).unwrap())),
        (rate.clone(), 1usize..1000, 0.01f32..1.0).prop_map(|(r, size, gamma)| {
            Schedule::Step(StepDecayLR::new(r, size, gamma).unwrap())
        }),
        (rate.clone(), 1usize..500, 0.01f32..1.0).prop_map(|(r, m, gamma)| {
            Schedule::MultiStep(MultiStepLR::new(r, vec![m, m + 100, m + 250], gamma).unwrap())
        }),
        (rate.clone(), 1usize..100_000)
            .prop_map(|(r, total)| Schedule::Linear(LinearDecayLR::new(r, total).unwrap())),
        (rate.clone(), 0.01f32..1.0)
            .prop_map(|(r, gamma)| Schedule::Exponential(ExponentialLR::new(r, gamma).unwrap())),
        (rate.clone(), 1usize..100, 101usize..100_000).prop_map(|(r, warmup, total)| {
            Schedule::WarmupCosine(WarmupCosineLR::new(r, r * 0.1, warmup, total).unwrap())
        }),
        (rate.clone(), 1usize..100_000, 0.1f32..5.0).prop_map(|(r, total, power)| {
            Schedule::Polynomial(PolynomialLR::new(r, r * 0.1, total, power).unwrap())
        }),
        (rate.clone(), 10usize..100_000, 0.05f32..0.95).prop_map(|(r, total, pct)| {
            Schedule::OneCycle(OneCycleLR::new(r * 0.1, r, total, pct).unwrap())
        }),
        (rate.clone(), 1usize..1000, 1u32..4).prop_map(|(r, t_0, t_mult)| {
            Schedule::WarmRestarts(WarmRestartsLR::new(r, r * 0.1, t_0, t_mult).unwrap())
        }),
        (rate, 1usize..1000).prop_map(|(r, len)| {
            Schedule::Cyclic(CyclicLR::new(r * 0.1, r, len).unwrap())
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_rate_bounded_by_configured_peak(
        schedule in arb_schedule(),
        step in 0usize..1_000_000,
    ) {
        let rate = schedule.rate_at(step);
        prop_assert!(rate >= 0.0, "negative rate {rate} at step {step}");
        prop_assert!(
            rate <= schedule.peak_rate() * (1.0 + 1e-5),
            "rate {rate} exceeds peak {} at step {step}",
            schedule.peak_rate()
        );
    }

    #[test]
    fn prop_rate_is_idempotent(
        schedule in arb_schedule(),
        step in 0usize..1_000_000,
    ) {
        prop_assert_eq!(schedule.rate_at(step), schedule.rate_at(step));
    }

    #[test]
    fn prop_step_decay_non_increasing(
        base in 1e-6f32..1.0f32,
        size in 1usize..1000,
        gamma in 0.01f32..0.999,
        step in 0usize..100_000,
    ) {
        let schedule = StepDecayLR::new(base, size, gamma).unwrap();
        prop_assert!(schedule.rate_at(step + 1) <= schedule.rate_at(step));
    }

    #[test]
    fn prop_exponential_non_increasing(
        base in 1e-6f32..1.0f32,
        gamma in 0.01f32..0.999,
        step in 0usize..10_000,
    ) {
        let schedule = ExponentialLR::new(base, gamma).unwrap();
        prop_assert!(schedule.rate_at(step + 1) <= schedule.rate_at(step));
    }

    #[test]
    fn prop_warmup_is_non_decreasing(
        base in 1e-6f32..1.0f32,
        warmup in 2usize..1000,
        step in 0usize..999,
    ) {
        prop_assume!(step + 1 <= warmup);
        let schedule = WarmupCosineLR::new(base, 0.0, warmup, warmup * 10).unwrap();
        prop_assert!(schedule.rate_at(step + 1) >= schedule.rate_at(step));
    }

    #[test]
    fn prop_warmup_cosine_decay_non_increasing(
        base in 1e-6f32..1.0f32,
        warmup in 0usize..100,
        extra in 1usize..10_000,
        offset in 0usize..10_000,
    ) {
        let total = warmup + extra;
        let schedule = WarmupCosineLR::new(base, 0.0, warmup, total).unwrap();
        let step = warmup + offset;
        prop_assert!(schedule.rate_at(step + 1) <= schedule.rate_at(step) + 1e-9);
    }

    #[test]
    fn prop_warm_restarts_cycle_lookup_consistent(
        base in 1e-6f32..1.0f32,
        t_0 in 1usize..500,
        t_mult in 1u32..4,
        step in 0usize..1_000_000,
    ) {
        let schedule = WarmRestartsLR::new(base, 0.0, t_0, t_mult).unwrap();
        let pos = schedule.cycle_at(step);
        prop_assert!(pos.local_step < pos.cycle_len);

        // Cycle starts restart at the base rate
        if pos.local_step == 0 {
            let rate = schedule.rate_at(step);
            prop_assert!((rate - base).abs() < 1e-6 * base.max(1.0));
        }
    }
}
