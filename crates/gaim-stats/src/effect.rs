//! Standardized effect size (Cohen's d)

use serde::{Deserialize, Serialize};

use crate::summary::{round_to, SampleStatistics};

/// Qualitative magnitude of a Cohen's d value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectSizeLabel {
    /// |d| < 0.5
    Small,
    /// 0.5 <= |d| < 0.8
    Medium,
    /// |d| >= 0.8
    Large,
}

impl EffectSizeLabel {
    /// Lowercase name used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectSizeLabel::Small => "small",
            EffectSizeLabel::Medium => "medium",
            EffectSizeLabel::Large => "large",
        }
    }
}

impl std::fmt::Display for EffectSizeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cohen's d with pooled standard deviation, rounded to 3 decimals
///
/// Returns 0 when either sample has fewer than two observations or when the
/// pooled standard deviation is 0.
pub fn cohens_d(a: &[f64], b: &[f64]) -> f64 {
    if a.len() < 2 || b.len() < 2 {
        return 0.0;
    }

    let stats_a = SampleStatistics::from_sample(a);
    let stats_b = SampleStatistics::from_sample(b);
    let n_a = stats_a.n as f64;
    let n_b = stats_b.n as f64;

    let pooled_sd = (((n_a - 1.0) * stats_a.variance() + (n_b - 1.0) * stats_b.variance())
        / (n_a + n_b - 2.0))
        .sqrt();
    if pooled_sd == 0.0 {
        return 0.0;
    }

    round_to((stats_a.mean - stats_b.mean) / pooled_sd, 3)
}

/// Classify an effect size using Cohen's conventions
pub fn effect_size_label(d: f64) -> EffectSizeLabel {
    let abs_d = d.abs();
    if abs_d >= 0.8 {
        EffectSizeLabel::Large
    } else if abs_d >= 0.5 {
        EffectSizeLabel::Medium
    } else {
        EffectSizeLabel::Small
    }
}
