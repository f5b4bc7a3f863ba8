//! Welch's unequal-variance t-test
//!
//! Compares the means of two independent samples without assuming equal
//! population variances. Degrees of freedom come from the
//! Welch–Satterthwaite approximation, and the two-tailed p-value is exact:
//!
//! ```text
//! p = I_{df / (df + t²)}(df / 2, 1 / 2)
//! ```
//!
//! Insufficient data (fewer than two observations in a group) or two
//! perfectly homogeneous groups report "no effect" rather than failing.

use serde::{Deserialize, Serialize};

use crate::beta::regularized_incomplete_beta;
use crate::summary::{round_to, SampleStatistics};
use crate::SIGNIFICANCE_LEVEL;

/// Outcome of a Welch t-test
///
/// `t`, `df` and `p` are rounded for display (3, 1 and 4 decimals).
/// `significant` is decided on the unrounded p-value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TTestResult {
    /// t statistic, sign of `mean(a) - mean(b)`
    pub t: f64,
    /// Welch–Satterthwaite degrees of freedom
    pub df: f64,
    /// Two-tailed p-value
    pub p: f64,
    /// `p < 0.05`
    pub significant: bool,
}

impl TTestResult {
    /// Result reported when either group has fewer than two observations
    pub fn insufficient() -> Self {
        Self {
            t: 0.0,
            df: 0.0,
            p: 1.0,
            significant: false,
        }
    }

    /// Result reported when both groups have zero variance
    fn no_variance(df: f64) -> Self {
        Self {
            t: 0.0,
            df,
            p: 1.0,
            significant: false,
        }
    }
}

/// Run Welch's t-test on two independent samples
pub fn welch_t_test(a: &[f64], b: &[f64]) -> TTestResult {
    if a.len() < 2 || b.len() < 2 {
        return TTestResult::insufficient();
    }

    let stats_a = SampleStatistics::from_sample(a);
    let stats_b = SampleStatistics::from_sample(b);
    let n_a = stats_a.n as f64;
    let n_b = stats_b.n as f64;
    let pooled_df = n_a + n_b - 2.0;

    let se2_a = stats_a.variance() / n_a;
    let se2_b = stats_b.variance() / n_b;
    let se = (se2_a + se2_b).sqrt();
    if se == 0.0 {
        return TTestResult::no_variance(pooled_df);
    }

    let t = (stats_a.mean - stats_b.mean) / se;

    let denom = se2_a.powi(2) / (n_a - 1.0) + se2_b.powi(2) / (n_b - 1.0);
    let df = if denom == 0.0 {
        pooled_df
    } else {
        (se2_a + se2_b).powi(2) / denom
    };

    let p = student_t_two_tailed_p(t, df);

    TTestResult {
        t: round_to(t, 3),
        df: round_to(df, 1),
        p: round_to(p, 4),
        significant: p < SIGNIFICANCE_LEVEL,
    }
}

/// Two-tailed p-value of a Student t statistic with `df` degrees of freedom
pub fn student_t_two_tailed_p(t: f64, df: f64) -> f64 {
    let x = df / (df + t * t);
    regularized_incomplete_beta(df / 2.0, 0.5, x)
}
