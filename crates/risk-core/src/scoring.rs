//! Risk scoring and severity aggregation.
//!
//! Two independent analyses run over a dataset:
//! - severity counts classify the raw product `likelihood * impact`
//!   (see [`Severity::from_product`]);
//! - the score histogram bins the continuous
//!   `likelihood * impact / (control_effectiveness + detectability)`.
//!
//! Neither feeds the other. The denominator is never zero because both of its
//! terms are at least 1 for any record that passed range validation.

use crate::entities::{
    HistogramBin, RiskDataset, RiskRecord, ScoreHistogram, ScoredDataset, ScoredRecord,
    SeverityCounts,
};
use crate::enums::Severity;

/// Number of equal-width buckets in the score histogram.
pub const HISTOGRAM_BINS: usize = 5;

/// Raw `likelihood * impact`, in `1..=25` for validated records.
#[must_use]
pub fn raw_product(record: &RiskRecord) -> u16 {
    u16::from(record.likelihood) * u16::from(record.impact)
}

/// Continuous risk score, in `0.1..=12.5`.
#[must_use]
pub fn risk_score(record: &RiskRecord) -> f64 {
    f64::from(raw_product(record))
        / f64::from(u16::from(record.control_effectiveness) + u16::from(record.detectability))
}

/// Severity class from the raw product. Ignores the continuous score.
#[must_use]
pub fn classify(record: &RiskRecord) -> Severity {
    Severity::from_product(raw_product(record))
}

#[must_use]
pub fn score_record(record: &RiskRecord) -> ScoredRecord {
    ScoredRecord {
        record: record.clone(),
        product: raw_product(record),
        risk_score: risk_score(record),
        severity: classify(record),
    }
}

/// High/medium/low counts over the dataset.
#[must_use]
pub fn severity_counts(dataset: &RiskDataset) -> SeverityCounts {
    let mut counts = SeverityCounts::default();
    for record in dataset {
        counts.add(classify(record));
    }
    counts
}

/// Five equal-width buckets over the observed score range.
#[must_use]
pub fn score_histogram(dataset: &RiskDataset) -> ScoreHistogram {
    let scores: Vec<f64> = dataset.iter().map(risk_score).collect();
    histogram(&scores, HISTOGRAM_BINS)
}

/// Score every record and compute both aggregates.
#[must_use]
pub fn score_dataset(dataset: &RiskDataset) -> ScoredDataset {
    ScoredDataset {
        records: dataset.iter().map(score_record).collect(),
        counts: severity_counts(dataset),
        histogram: score_histogram(dataset),
    }
}

/// Equal-width histogram. The last bin is closed on the right, the rest are half-open.
///
/// An empty input spans `[0, 1]`; a constant input spans `[v - 0.5, v + 0.5]`.
#[allow(clippy::cast_precision_loss)]
fn histogram(values: &[f64], bins: usize) -> ScoreHistogram {
    let (mut lower, mut upper) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });

    if values.is_empty() {
        lower = 0.0;
        upper = 1.0;
    } else if (upper - lower).abs() < f64::EPSILON {
        lower -= 0.5;
        upper += 0.5;
    }

    let width = (upper - lower) / bins as f64;
    let edges: Vec<f64> = (0..=bins)
        .map(|index| {
            if index == bins {
                upper
            } else {
                width.mul_add(index as f64, lower)
            }
        })
        .collect();

    let mut buckets: Vec<HistogramBin> = edges
        .windows(2)
        .map(|pair| HistogramBin {
            lower: pair[0],
            upper: pair[1],
            count: 0,
        })
        .collect();

    for value in values {
        buckets[bin_index(*value, &edges)].count += 1;
    }

    ScoreHistogram { bins: buckets }
}

/// Bucket for `value` against `edges`. The float estimate is corrected by one
/// step either way so the result agrees with the stored edges.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bin_index(value: f64, edges: &[f64]) -> usize {
    let last = edges.len() - 2;
    let lower = edges[0];
    let width = edges[1] - lower;
    let mut index = (((value - lower) / width).floor().max(0.0) as usize).min(last);
    if index > 0 && value < edges[index] {
        index -= 1;
    } else if index < last && value >= edges[index + 1] {
        index += 1;
    }
    index
}
