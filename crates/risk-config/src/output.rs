//! Output artifact locations.

use std::path::PathBuf;

use risk_core::enums::ArtifactKind;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_dir() -> String {
    ".".to_string()
}

fn default_risk_matrix_chart() -> String {
    "Risk_Matrix.html".to_string()
}

fn default_score_distribution_chart() -> String {
    "Risk_Score_Distribution.html".to_string()
}

fn default_spreadsheet() -> String {
    "Enhanced_Risk_Assessment_Data.csv".to_string()
}

fn default_document() -> String {
    "Professional_Risk_Assessment_Report.html".to_string()
}

/// Directory and file names of the four artifacts. Files are overwritten on every run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_dir")]
    pub dir: String,

    #[serde(default = "default_risk_matrix_chart")]
    pub risk_matrix_chart: String,

    #[serde(default = "default_score_distribution_chart")]
    pub score_distribution_chart: String,

    #[serde(default = "default_spreadsheet")]
    pub spreadsheet: String,

    #[serde(default = "default_document")]
    pub document: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            risk_matrix_chart: default_risk_matrix_chart(),
            score_distribution_chart: default_score_distribution_chart(),
            spreadsheet: default_spreadsheet(),
            document: default_document(),
        }
    }
}

impl OutputConfig {
    #[must_use]
    pub fn file_name(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::RiskMatrixChart => &self.risk_matrix_chart,
            ArtifactKind::ScoreDistributionChart => &self.score_distribution_chart,
            ArtifactKind::Spreadsheet => &self.spreadsheet,
            ArtifactKind::Document => &self.document,
        }
    }

    /// Full path of the artifact inside `dir`.
    #[must_use]
    pub fn path_for(&self, kind: ArtifactKind) -> PathBuf {
        PathBuf::from(&self.dir).join(self.file_name(kind))
    }

    /// Reject empty names and names that would collide with each other.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        const KINDS: [ArtifactKind; 4] = [
            ArtifactKind::RiskMatrixChart,
            ArtifactKind::ScoreDistributionChart,
            ArtifactKind::Spreadsheet,
            ArtifactKind::Document,
        ];

        if self.dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        for (index, kind) in KINDS.iter().enumerate() {
            let name = self.file_name(*kind);
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("output.{kind}"),
                    reason: "must not be empty".to_string(),
                });
            }
            if KINDS[..index].iter().any(|other| self.file_name(*other) == name) {
                return Err(ConfigError::InvalidValue {
                    field: format!("output.{kind}"),
                    reason: format!("'{name}' is already used by another artifact"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = OutputConfig::default();
        assert_eq!(config.dir, ".");
        assert_eq!(config.spreadsheet, "Enhanced_Risk_Assessment_Data.csv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn path_joins_dir_and_name() {
        let config = OutputConfig {
            dir: "out".to_string(),
            ..OutputConfig::default()
        };
        assert_eq!(
            config.path_for(ArtifactKind::Document),
            PathBuf::from("out").join("Professional_Risk_Assessment_Report.html")
        );
    }

    #[test]
    fn colliding_names_are_rejected() {
        let config = OutputConfig {
            document: "Risk_Matrix.html".to_string(),
            ..OutputConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("output.document"));
    }

    #[test]
    fn empty_name_is_rejected() {
        let config = OutputConfig {
            spreadsheet: "  ".to_string(),
            ..OutputConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
