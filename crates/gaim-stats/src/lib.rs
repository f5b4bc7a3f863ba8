//! gaim-stats - Statistical comparison engine for assessment cohorts
//!
//! This crate decides whether two independent groups of assessment scores
//! differ meaningfully:
//!
//! - **Summary**: sample mean and Bessel-corrected standard deviation
//! - **Welch t-test**: unequal-variance t statistic, Welch–Satterthwaite
//!   degrees of freedom and an exact two-tailed p-value
//! - **Effect size**: Cohen's d with a small/medium/large label
//! - **Cohort**: per-dimension comparison reports over assessment records
//!
//! The p-value comes from the regularized incomplete beta function, evaluated
//! by continued fraction on top of a Lanczos log-gamma approximation.
//!
//! # Design Philosophy
//!
//! Every engine function is pure and infallible. Degenerate inputs (empty
//! groups, single observations, zero variance) map to "no detectable
//! difference" instead of errors, because insufficient data is a valid
//! outcome of a comparison.

pub mod beta;
pub mod cohort;
pub mod config;
pub mod effect;
pub mod error;
pub mod gamma;
pub mod summary;
pub mod ttest;

pub use beta::regularized_incomplete_beta;
pub use cohort::{
    compare_cohorts, extract_dimension_scores, parse_records, AssessmentRecord, Cohort,
    CohortComparison, CohortSummary, DimensionComparison, DimensionScore,
};
pub use config::{ComparisonConfig, DEFAULT_DIMENSIONS};
pub use effect::{cohens_d, effect_size_label, EffectSizeLabel};
pub use error::{ConfigError, Error, Result};
pub use gamma::ln_gamma;
pub use summary::{mean, sd, SampleStatistics};
pub use ttest::{student_t_two_tailed_p, welch_t_test, TTestResult};

/// Significance level for the two-tailed t-test
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!((SIGNIFICANCE_LEVEL - 0.05).abs() < f64::EPSILON);
    }
}
