//! # risk-export
//!
//! Output sinks for a riskgen pipeline run:
//! - [`charts`]: likelihood/impact scatter and score histogram (plotly HTML)
//! - [`spreadsheet`]: the raw dataset as CSV
//! - [`document`]: the composed report as a standalone HTML document (maud)
//!
//! Each sink receives its destination explicitly and overwrites it. Failures are
//! returned as [`ExportError`]; nothing is retried.

pub mod charts;
pub mod document;
mod error;
pub mod spreadsheet;

pub use error::ExportError;

use std::path::{Path, PathBuf};

use risk_core::enums::ArtifactKind;

/// Destinations of the four artifacts of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub risk_matrix_chart: PathBuf,
    pub score_distribution_chart: PathBuf,
    pub spreadsheet: PathBuf,
    pub document: PathBuf,
}

impl ArtifactPaths {
    /// Artifacts in the order a run writes them.
    pub const ORDER: [ArtifactKind; 4] = [
        ArtifactKind::RiskMatrixChart,
        ArtifactKind::ScoreDistributionChart,
        ArtifactKind::Spreadsheet,
        ArtifactKind::Document,
    ];

    /// Build paths from a resolver, typically backed by configuration.
    pub fn from_fn(mut resolve: impl FnMut(ArtifactKind) -> PathBuf) -> Self {
        Self {
            risk_matrix_chart: resolve(ArtifactKind::RiskMatrixChart),
            score_distribution_chart: resolve(ArtifactKind::ScoreDistributionChart),
            spreadsheet: resolve(ArtifactKind::Spreadsheet),
            document: resolve(ArtifactKind::Document),
        }
    }

    #[must_use]
    pub fn get(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::RiskMatrixChart => &self.risk_matrix_chart,
            ArtifactKind::ScoreDistributionChart => &self.score_distribution_chart,
            ArtifactKind::Spreadsheet => &self.spreadsheet,
            ArtifactKind::Document => &self.document,
        }
    }
}

/// Write `contents` to `path`, replacing any existing file.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    std::fs::write(path, contents).map_err(|source| ExportError::io(path, source))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "artifact written");
    Ok(())
}
