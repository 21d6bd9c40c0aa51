//! Severity classes, report section kinds, and artifact kinds.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Products strictly above this value are [`Severity::High`].
pub const HIGH_PRODUCT_THRESHOLD: u16 = 16;

/// Products strictly above this value (and not High) are [`Severity::Medium`].
pub const MEDIUM_PRODUCT_THRESHOLD: u16 = 8;

/// Severity class of a risk, derived from the raw `likelihood * impact` product.
///
/// ```text
/// product  1 ..= 8   → low
/// product  9 ..= 16  → medium
/// product 17 ..= 25  → high
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Classify a raw `likelihood * impact` product.
    #[must_use]
    pub const fn from_product(product: u16) -> Self {
        if product > HIGH_PRODUCT_THRESHOLD {
            Self::High
        } else if product > MEDIUM_PRODUCT_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Capitalized label used in report text (`"High"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SectionKind
// ---------------------------------------------------------------------------

/// The five fixed report sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Introduction,
    Methodology,
    SummaryOfFindings,
    DetailedAssessment,
    Recommendations,
}

impl SectionKind {
    /// Every section kind in the order it appears in the report.
    pub const ALL: [Self; 5] = [
        Self::Introduction,
        Self::Methodology,
        Self::SummaryOfFindings,
        Self::DetailedAssessment,
        Self::Recommendations,
    ];

    /// One-based position of the section in the report.
    #[must_use]
    pub const fn number(self) -> usize {
        match self {
            Self::Introduction => 1,
            Self::Methodology => 2,
            Self::SummaryOfFindings => 3,
            Self::DetailedAssessment => 4,
            Self::Recommendations => 5,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Introduction => "Introduction",
            Self::Methodology => "Methodology",
            Self::SummaryOfFindings => "Summary of Findings",
            Self::DetailedAssessment => "Detailed Risk Assessment",
            Self::Recommendations => "Recommendations",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Introduction => "introduction",
            Self::Methodology => "methodology",
            Self::SummaryOfFindings => "summary_of_findings",
            Self::DetailedAssessment => "detailed_assessment",
            Self::Recommendations => "recommendations",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ArtifactKind
// ---------------------------------------------------------------------------

/// Files produced by a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    RiskMatrixChart,
    ScoreDistributionChart,
    Spreadsheet,
    Document,
}

impl ArtifactKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RiskMatrixChart => "risk_matrix_chart",
            Self::ScoreDistributionChart => "score_distribution_chart",
            Self::Spreadsheet => "spreadsheet",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
