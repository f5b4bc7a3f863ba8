//! Descriptive statistics for score samples
//!
//! Provides the building blocks used by the comparison tests:
//! - Arithmetic mean
//! - Sample standard deviation (Bessel-corrected, n - 1)
//! - A bundled [`SampleStatistics`] summary
//!
//! Degenerate samples never produce errors: an empty sample has mean 0 and
//! fewer than two observations have standard deviation 0.

use serde::{Deserialize, Serialize};

/// Summary statistics for a single sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub sd: f64,
    /// Number of observations
    pub n: usize,
}

impl SampleStatistics {
    /// Compute summary statistics from a sample
    pub fn from_sample(sample: &[f64]) -> Self {
        Self {
            mean: mean(sample),
            sd: sd(sample),
            n: sample.len(),
        }
    }

    /// Sample variance (square of the standard deviation)
    pub fn variance(&self) -> f64 {
        self.sd * self.sd
    }

    /// Copy with mean and sd rounded to `decimals` places for display
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            mean: round_to(self.mean, decimals),
            sd: round_to(self.sd, decimals),
            n: self.n,
        }
    }
}

/// Arithmetic mean of a sample, 0 for an empty sample
pub fn mean(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// Sample standard deviation with Bessel's correction
///
/// Returns 0 when the sample has fewer than two observations.
pub fn sd(sample: &[f64]) -> f64 {
    if sample.len() < 2 {
        return 0.0;
    }
    let m = mean(sample);
    let sum_sq: f64 = sample.iter().map(|x| (x - m).powi(2)).sum();
    (sum_sq / (sample.len() - 1) as f64).sqrt()
}

/// Round to a fixed number of decimal places (half away from zero)
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[5.0]), 5.0);
        assert_eq!(mean(&[2.0, 4.0, 6.0, 8.0]), 5.0);
    }

    #[test]
    fn test_sd_degenerate() {
        assert_eq!(sd(&[]), 0.0);
        assert_eq!(sd(&[5.0]), 0.0);
        assert_eq!(sd(&[3.0, 3.0, 3.0, 3.0]), 0.0);
    }

    #[test]
    fn test_sd_bessel() {
        // Squared deviations sum to 20, divided by n - 1 = 3
        let s = sd(&[2.0, 4.0, 6.0, 8.0]);
        assert!((s - (20.0_f64 / 3.0).sqrt()).abs() < 1e-12);
        assert!((s - 2.582).abs() < 0.01);
    }

    #[test]
    fn test_order_irrelevant() {
        let a = [1.0, 7.0, 3.0, 9.0];
        let b = [9.0, 3.0, 7.0, 1.0];
        assert_eq!(mean(&a), mean(&b));
        assert!((sd(&a) - sd(&b)).abs() < 1e-12);
    }

    #[test]
    fn test_sample_statistics() {
        let stats = SampleStatistics::from_sample(&[2.0, 4.0, 6.0, 8.0]);
        assert_eq!(stats.n, 4);
        assert_eq!(stats.mean, 5.0);
        assert!((stats.variance() - 20.0 / 3.0).abs() < 1e-12);

        let rounded = stats.rounded(2);
        assert_eq!(rounded.sd, 2.58);
        assert_eq!(rounded.n, 4);
    }

    #[test]
    fn test_sample_statistics_empty() {
        let stats = SampleStatistics::from_sample(&[]);
        assert_eq!(stats.n, 0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.sd, 0.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(5.36859, 3), 5.369);
        assert_eq!(round_to(-5.36859, 3), -5.369);
        assert_eq!(round_to(6.0465, 1), 6.0);
        assert_eq!(round_to(0.0, 4), 0.0);
    }
}
