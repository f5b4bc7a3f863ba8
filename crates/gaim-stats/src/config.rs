//! Configuration for cohort comparisons
//!
//! Controls which assessment dimensions are compared and how group
//! summaries are rounded. The significance level is fixed at
//! [`SIGNIFICANCE_LEVEL`](crate::SIGNIFICANCE_LEVEL) and not configurable.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// The seven rubric dimensions scored for every lesson demonstration
pub const DEFAULT_DIMENSIONS: [&str; 7] = [
    "Teaching Expertise",
    "Teaching-Learning Methods",
    "Board Writing & Language",
    "Classroom Attitude",
    "Student Engagement",
    "Time Allocation",
    "Creativity",
];

/// Cohort comparison configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Dimension names, compared in this order
    pub dimensions: Vec<String>,
    /// Compare each record's total score before the dimensions
    pub include_total: bool,
    /// Label used for the total score row
    pub total_label: String,
    /// Decimal places for group mean and sd in reports
    pub summary_decimals: u32,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS.iter().map(|d| d.to_string()).collect(),
            include_total: true,
            total_label: "total".to_string(),
            summary_decimals: 2,
        }
    }
}

impl ComparisonConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml(&contents)?;
        config.validate()?;
        tracing::debug!(
            path = %path.as_ref().display(),
            dimensions = config.dimensions.len(),
            "loaded comparison config"
        );
        Ok(config)
    }

    /// Labels of every compared row, in report order
    pub fn row_labels(&self) -> Vec<&str> {
        let total = self.include_total.then_some(self.total_label.as_str());
        total
            .into_iter()
            .chain(self.dimensions.iter().map(String::as_str))
            .collect()
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.dimensions.is_empty() && !self.include_total {
            return Err(ConfigError::NoDimensions);
        }

        if self.include_total && self.total_label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel("total_label".to_string()));
        }

        let mut seen = HashSet::new();
        for label in self.row_labels() {
            if label.trim().is_empty() {
                return Err(ConfigError::EmptyLabel("dimensions".to_string()));
            }
            if !seen.insert(label) {
                return Err(ConfigError::DuplicateDimension(label.to_string()));
            }
        }

        Ok(())
    }
}
