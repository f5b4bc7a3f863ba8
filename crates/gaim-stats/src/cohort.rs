//! Cohort comparison
//!
//! Compares two groups of assessment records (a class, a university, an
//! intake year) dimension by dimension. Each dimension gets group
//! summaries, a Welch t-test, Cohen's d and its label.
//!
//! When the `parallel` feature is enabled, dimensions are compared using
//! rayon. Report order always follows the configuration.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ComparisonConfig;
use crate::effect::{cohens_d, effect_size_label, EffectSizeLabel};
use crate::error::Result;
use crate::summary::SampleStatistics;
use crate::ttest::{welch_t_test, TTestResult};

/// Score for one rubric dimension of an assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    /// Dimension name
    pub name: String,
    /// Score as a percentage of the dimension maximum
    #[serde(default)]
    pub percentage: f64,
}

/// A single scored lesson demonstration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Overall score
    #[serde(default)]
    pub total_score: f64,
    /// Per-dimension scores
    #[serde(default)]
    pub dimensions: Vec<DimensionScore>,
}

impl AssessmentRecord {
    /// First percentage recorded for a dimension, if present
    pub fn dimension(&self, name: &str) -> Option<f64> {
        self.dimension_scores(name).next()
    }

    /// Every percentage recorded under a dimension name
    pub fn dimension_scores<'a>(&'a self, name: &'a str) -> impl Iterator<Item = f64> + 'a {
        self.dimensions
            .iter()
            .filter(move |d| d.name == name)
            .map(|d| d.percentage)
    }
}

/// Parse a JSON array of assessment records
pub fn parse_records(json: &str) -> Result<Vec<AssessmentRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// A labelled group of assessment records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cohort {
    /// Display label
    pub label: String,
    /// Records belonging to the group
    pub records: Vec<AssessmentRecord>,
}

impl Cohort {
    /// Create a cohort from a label and its records
    pub fn new(label: impl Into<String>, records: Vec<AssessmentRecord>) -> Self {
        Self {
            label: label.into(),
            records,
        }
    }
}

/// Per-dimension score samples, in configuration order
///
/// Every entry matching a dimension name contributes to its sample.
pub fn extract_dimension_scores(
    records: &[AssessmentRecord],
    config: &ComparisonConfig,
) -> Vec<(String, Vec<f64>)> {
    let mut samples = Vec::with_capacity(config.dimensions.len() + 1);

    if config.include_total {
        let totals = records.iter().map(|r| r.total_score).collect();
        samples.push((config.total_label.clone(), totals));
    }

    for name in &config.dimensions {
        let scores = records
            .iter()
            .flat_map(|r| r.dimension_scores(name))
            .collect();
        samples.push((name.clone(), scores));
    }

    samples
}

/// Header for one side of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortSummary {
    /// Display label
    pub label: String,
    /// Number of assessment records in the group
    pub n_analyses: usize,
}

/// Comparison of both groups on a single dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionComparison {
    /// Dimension name (or the total label)
    pub dimension: String,
    /// Group A summary, rounded for display
    pub group_a: SampleStatistics,
    /// Group B summary, rounded for display
    pub group_b: SampleStatistics,
    /// Welch t-test of A against B
    pub t_test: TTestResult,
    /// Cohen's d of A against B
    pub cohens_d: f64,
    /// Magnitude label for `cohens_d`
    pub effect_size: EffectSizeLabel,
}

impl DimensionComparison {
    /// Compare two samples for one dimension
    pub fn compute(dimension: &str, a: &[f64], b: &[f64], summary_decimals: u32) -> Self {
        let d = cohens_d(a, b);
        let t_test = welch_t_test(a, b);
        tracing::debug!(
            dimension,
            t = t_test.t,
            p = t_test.p,
            d,
            "compared dimension"
        );
        Self {
            dimension: dimension.to_string(),
            group_a: SampleStatistics::from_sample(a).rounded(summary_decimals),
            group_b: SampleStatistics::from_sample(b).rounded(summary_decimals),
            t_test,
            cohens_d: d,
            effect_size: effect_size_label(d),
        }
    }
}

/// Full comparison report between two cohorts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortComparison {
    /// Group A header
    pub group_a: CohortSummary,
    /// Group B header
    pub group_b: CohortSummary,
    /// One row per compared dimension, in configuration order
    pub comparisons: Vec<DimensionComparison>,
}

impl CohortComparison {
    /// Dimensions whose t-test is significant
    pub fn significant_dimensions(&self) -> impl Iterator<Item = &DimensionComparison> {
        self.comparisons.iter().filter(|c| c.t_test.significant)
    }

    /// Dimension with the largest |d|, first one on ties
    pub fn largest_effect(&self) -> Option<&DimensionComparison> {
        self.comparisons.iter().fold(None, |best, c| match best {
            Some(b) if b.cohens_d.abs() >= c.cohens_d.abs() => Some(b),
            _ => Some(c),
        })
    }

    /// Serialize the report to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compare two cohorts on every configured dimension
pub fn compare_cohorts(
    group_a: &Cohort,
    group_b: &Cohort,
    config: &ComparisonConfig,
) -> Result<CohortComparison> {
    config.validate()?;

    let samples_a = extract_dimension_scores(&group_a.records, config);
    let samples_b = extract_dimension_scores(&group_b.records, config);
    let decimals = config.summary_decimals;

    #[cfg(feature = "parallel")]
    let comparisons: Vec<DimensionComparison> = samples_a
        .par_iter()
        .zip(samples_b.par_iter())
        .map(|((name, a), (_, b))| DimensionComparison::compute(name, a, b, decimals))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let comparisons: Vec<DimensionComparison> = samples_a
        .iter()
        .zip(samples_b.iter())
        .map(|((name, a), (_, b))| DimensionComparison::compute(name, a, b, decimals))
        .collect();

    tracing::info!(
        group_a = %group_a.label,
        group_b = %group_b.label,
        dimensions = comparisons.len(),
        "cohort comparison complete"
    );

    Ok(CohortComparison {
        group_a: CohortSummary {
            label: group_a.label.clone(),
            n_analyses: group_a.records.len(),
        },
        group_b: CohortSummary {
            label: group_b.label.clone(),
            n_analyses: group_b.records.len(),
        },
        comparisons,
    })
}
