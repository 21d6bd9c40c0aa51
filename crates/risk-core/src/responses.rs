//! CLI response types returned by `riskgen` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ScoreHistogram, SeverityCounts};
use crate::enums::ArtifactKind;

/// One file written by a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ArtifactRecord {
    pub kind: ArtifactKind,
    pub path: String,
}

/// Response from `riskgen run`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub seed: Option<u64>,
    pub counts: SeverityCounts,
    pub artifacts: Vec<ArtifactRecord>,
}

/// Response from `riskgen summary`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SummaryResponse {
    pub counts: SeverityCounts,
    pub histogram: ScoreHistogram,
}
