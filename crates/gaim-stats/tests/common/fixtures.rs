//! Test fixture loading utilities

use std::path::PathBuf;

use gaim_stats::{parse_records, AssessmentRecord, Cohort};

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Load the assessment records of a cohort fixture
pub fn load_records(name: &str) -> Vec<AssessmentRecord> {
    parse_records(&load_fixture(&format!("cohorts/{}.json", name)))
        .unwrap_or_else(|e| panic!("Invalid cohort fixture {}: {}", name, e))
}

/// Load a cohort fixture labelled by its file name
pub fn load_cohort(name: &str) -> Cohort {
    Cohort::new(name, load_records(name))
}
