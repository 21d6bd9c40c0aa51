use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Severity;

use super::RiskRecord;

/// A record with its derived score and severity class. Computed on demand.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: RiskRecord,
    /// Raw `likelihood * impact`, the input to severity classification.
    pub product: u16,
    pub risk_score: f64,
    pub severity: Severity,
}

/// Aggregate severity counts. `high + medium + low == total` always holds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeverityCounts {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub const fn add(&mut self, severity: Severity) {
        self.total += 1;
        match severity {
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }

    #[must_use]
    pub const fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

/// One equal-width bucket of the score histogram.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl HistogramBin {
    /// Axis label such as `"0.10-2.58"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.2}-{:.2}", self.lower, self.upper)
    }
}

/// Distribution of continuous risk scores over the observed score range.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScoreHistogram {
    pub bins: Vec<HistogramBin>,
}

impl ScoreHistogram {
    /// Number of values binned.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

/// Output of the scorer for one dataset.
///
/// `counts` comes from the raw-product classification and `histogram` from the
/// continuous scores. The two are computed independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScoredDataset {
    pub records: Vec<ScoredRecord>,
    pub counts: SeverityCounts,
    pub histogram: ScoreHistogram,
}
