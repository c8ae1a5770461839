//! Benchmark dataset types and loading
//!
//! The dataset is fixed for the lifetime of the application: it is parsed
//! once from the bundled `data.json` and never mutated afterwards. Record
//! order in the file is the natural order, which drives color assignment
//! and the top-N quick select.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One model's aggregate test results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRecord {
    /// Unique model identifier
    pub model: String,
    /// Number of tests answered correctly
    pub correct: u32,
    /// Total number of tests run against the model
    pub total_tests: u32,
    /// Percentage of correct answers, precomputed as `100 * correct / total_tests`
    pub success_rate: f64,
    /// Mean response time in milliseconds
    pub average_duration: f64,
    /// Total cost across the whole suite, in dollars
    pub total_cost: f64,
    /// Mean cost of a single test, in dollars
    pub average_cost_per_test: f64,
}

/// The full benchmark dataset, in file (natural) order
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkDataset {
    /// When the suite was last run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    /// Human-readable suite name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    /// Per-model results
    pub records: Vec<BenchmarkRecord>,
}

impl BenchmarkDataset {
    /// Parse a dataset from JSON and validate every record
    pub fn from_json_str(s: &str) -> Result<Self> {
        let dataset: Self = serde_json::from_str(s)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Serialize back to pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<()> {
        for record in &self.records {
            if record.correct > record.total_tests {
                return Err(Error::InvalidRecord {
                    model: record.model.clone(),
                    reason: format!(
                        "correct ({}) exceeds totalTests ({})",
                        record.correct, record.total_tests
                    ),
                });
            }
            let numerics = [
                ("successRate", record.success_rate),
                ("averageDuration", record.average_duration),
                ("totalCost", record.total_cost),
                ("averageCostPerTest", record.average_cost_per_test),
            ];
            for (field, value) in numerics {
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::InvalidRecord {
                        model: record.model.clone(),
                        reason: format!("{} must be a non-negative number, got {}", field, value),
                    });
                }
            }
            if record.success_rate > 100.0 {
                return Err(Error::InvalidRecord {
                    model: record.model.clone(),
                    reason: format!("successRate {} is above 100", record.success_rate),
                });
            }
        }
        Ok(())
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in natural order
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Look up a record by model id
    pub fn get(&self, model: &str) -> Option<&BenchmarkRecord> {
        self.records.iter().find(|r| r.model == model)
    }

    /// Position of a model in the full dataset; this is the stable color index
    pub fn index_of(&self, model: &str) -> Option<usize> {
        self.records.iter().position(|r| r.model == model)
    }

    /// Ids of the first `n` records in natural order
    pub fn leading_models(&self, n: usize) -> impl Iterator<Item = &str> {
        self.records.iter().take(n).map(|r| r.model.as_str())
    }
}
