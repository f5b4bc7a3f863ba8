//! Statistical engine integration tests
//!
//! Reference values checked against textbook tables for the t-distribution.
//! Enhanced with property-based testing

use gaim_stats::{
    cohens_d, effect_size_label, ln_gamma, mean, regularized_incomplete_beta, sd,
    student_t_two_tailed_p, welch_t_test, EffectSizeLabel, TTestResult,
};
use proptest::prelude::*;
use rstest::rstest;

// === Descriptive Statistics ===

#[test]
fn test_mean_values() {
    assert_eq!(mean(&[]), 0.0);
    assert_eq!(mean(&[5.0]), 5.0);
    assert_eq!(mean(&[2.0, 4.0, 6.0, 8.0]), 5.0);
}

#[test]
fn test_sd_values() {
    assert_eq!(sd(&[5.0]), 0.0);
    assert_eq!(sd(&[3.0, 3.0, 3.0, 3.0]), 0.0);
    assert!((sd(&[2.0, 4.0, 6.0, 8.0]) - 2.582).abs() < 0.01);
}

// === Welch t-test ===

#[test]
fn test_identical_constant_groups() {
    let result = welch_t_test(&[5.0, 5.0, 5.0], &[5.0, 5.0, 5.0]);
    assert_eq!(result.t, 0.0);
    assert_eq!(result.p, 1.0);
    assert!(!result.significant);
}

#[test]
fn test_strong_difference() {
    let result = welch_t_test(
        &[90.0, 92.0, 88.0, 95.0, 91.0],
        &[60.0, 58.0, 62.0, 55.0, 59.0],
    );
    assert!(result.t > 0.0);
    assert!(result.p < 0.001);
    assert!(result.significant);
}

#[test]
fn test_overlapping_groups() {
    let result = welch_t_test(
        &[80.0, 82.0, 78.0, 85.0, 81.0],
        &[79.0, 83.0, 77.0, 84.0, 80.0],
    );
    assert!(!result.significant);
    assert!(result.p > 0.05);
}

#[test]
fn test_reference_t_statistic() {
    let result = welch_t_test(
        &[85.0, 90.0, 78.0, 92.0, 88.0],
        &[70.0, 75.0, 68.0, 72.0, 74.0],
    );
    assert!((result.t - 5.37).abs() < 0.1, "t = {}", result.t);
    assert!(result.p < 0.01);
    assert!(result.significant);
}

#[test]
fn test_single_observation_reports_no_effect() {
    assert_eq!(welch_t_test(&[100.0], &[0.0, 1.0, 2.0]), TTestResult::insufficient());
}

#[rstest]
#[case(2.228, 10.0, 0.05)] // t_{0.975, 10}
#[case(2.571, 5.0, 0.05)] // t_{0.975, 5}
#[case(3.169, 10.0, 0.01)] // t_{0.995, 10}
#[case(1.96, 1.0e6, 0.05)] // normal limit
fn test_critical_values(#[case] t: f64, #[case] df: f64, #[case] expected: f64) {
    let p = student_t_two_tailed_p(t, df);
    assert!(
        (p - expected).abs() < 5e-4,
        "t = {}, df = {}: p = {}",
        t,
        df,
        p
    );
}

// === Effect Size ===

#[test]
fn test_cohens_d_values() {
    assert_eq!(cohens_d(&[5.0, 5.0, 5.0], &[5.0, 5.0, 5.0]), 0.0);
    let d = cohens_d(
        &[90.0, 92.0, 88.0, 95.0, 91.0],
        &[60.0, 58.0, 62.0, 55.0, 59.0],
    );
    assert!(d.abs() > 0.8);
}

#[rstest]
#[case(0.0, EffectSizeLabel::Small)]
#[case(0.3, EffectSizeLabel::Small)]
#[case(0.6, EffectSizeLabel::Medium)]
#[case(-0.6, EffectSizeLabel::Medium)]
#[case(1.2, EffectSizeLabel::Large)]
#[case(-1.2, EffectSizeLabel::Large)]
fn test_effect_labels(#[case] d: f64, #[case] expected: EffectSizeLabel) {
    assert_eq!(effect_size_label(d), expected);
}

// === Special Functions ===

#[test]
fn test_ln_gamma_factorials() {
    let mut ln_factorial = 0.0;
    for n in 1..30 {
        // ln Γ(n + 1) = ln n!
        ln_factorial += (n as f64).ln();
        let actual = ln_gamma(n as f64 + 1.0);
        assert!(
            (actual - ln_factorial).abs() < 1e-9 * ln_factorial.max(1.0),
            "n = {}",
            n
        );
    }
}

// === Property Tests ===

fn sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..100.0, 2..30)
}

proptest! {
    #[test]
    fn test_swap_negates_t(a in sample(), b in sample()) {
        let ab = welch_t_test(&a, &b);
        let ba = welch_t_test(&b, &a);
        prop_assert_eq!(ab.t, -ba.t);
        prop_assert_eq!(ab.df, ba.df);
        prop_assert_eq!(ab.p, ba.p);
        prop_assert_eq!(ab.significant, ba.significant);
    }

    #[test]
    fn test_p_value_in_unit_interval(a in sample(), b in sample()) {
        let result = welch_t_test(&a, &b);
        prop_assert!((0.0..=1.0).contains(&result.p));
        prop_assert!(result.df >= 0.0);
    }

    #[test]
    fn test_repeat_calls_identical(a in sample(), b in sample()) {
        let first = welch_t_test(&a, &b);
        let second = welch_t_test(&a, &b);
        prop_assert_eq!(first.t.to_bits(), second.t.to_bits());
        prop_assert_eq!(first.df.to_bits(), second.df.to_bits());
        prop_assert_eq!(first.p.to_bits(), second.p.to_bits());
        prop_assert_eq!(cohens_d(&a, &b).to_bits(), cohens_d(&a, &b).to_bits());
        prop_assert_eq!(sd(&a).to_bits(), sd(&a).to_bits());
    }

    #[test]
    fn test_cohens_d_antisymmetric(a in sample(), b in sample()) {
        prop_assert_eq!(cohens_d(&a, &b), -cohens_d(&b, &a));
        prop_assert_eq!(
            effect_size_label(cohens_d(&a, &b)),
            effect_size_label(cohens_d(&b, &a))
        );
    }

    #[test]
    fn test_beta_endpoints(a in 0.05f64..50.0, b in 0.05f64..50.0) {
        prop_assert_eq!(regularized_incomplete_beta(a, b, 0.0), 0.0);
        prop_assert_eq!(regularized_incomplete_beta(a, b, 1.0), 1.0);
    }

    #[test]
    fn test_beta_monotone_in_x(
        a in 0.1f64..30.0,
        b in 0.1f64..30.0,
        x1 in 0.0f64..1.0,
        x2 in 0.0f64..1.0,
    ) {
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let i_lo = regularized_incomplete_beta(a, b, lo);
        let i_hi = regularized_incomplete_beta(a, b, hi);
        prop_assert!((0.0..=1.0).contains(&i_lo));
        prop_assert!(i_hi >= i_lo, "I({}) = {} > I({}) = {}", lo, i_lo, hi, i_hi);
    }
}
