//! Pipeline driver: generate → score → charts → spreadsheet → compose → document.
//!
//! Stages run strictly in sequence. Each sink opens, writes, and closes its own
//! file before the next stage starts; the first sink failure aborts the run.

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use risk_config::RiskConfig;
use risk_core::composer::compose_report;
use risk_core::entities::CoverPage;
use risk_core::enums::ArtifactKind;
use risk_core::generator::generate_dataset;
use risk_core::responses::{ArtifactRecord, RunSummary};
use risk_core::scoring::score_dataset;
use risk_export::{ArtifactPaths, ExportError, charts, document, spreadsheet};

use crate::progress::Progress;

/// Everything one run needs, resolved from configuration and CLI overrides.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub count: i64,
    pub seed: Option<u64>,
    pub paths: ArtifactPaths,
    pub cover: CoverPage,
}

impl PipelineSettings {
    #[must_use]
    pub fn from_config(config: &RiskConfig, date: NaiveDate) -> Self {
        Self {
            count: config.generation.count,
            seed: config.generation.seed,
            paths: ArtifactPaths::from_fn(|kind| config.output.path_for(kind)),
            cover: CoverPage {
                title: config.report.title.clone(),
                author: config.report.author.clone(),
                date,
            },
        }
    }
}

/// Execute one full pipeline run.
pub fn run(settings: &PipelineSettings) -> anyhow::Result<RunSummary> {
    tracing::info!(count = settings.count, seed = ?settings.seed, "generating records");
    let dataset = generate_dataset(settings.count, settings.seed);

    let scored = score_dataset(&dataset);
    tracing::info!(
        records = scored.records.len(),
        high = scored.counts.high,
        medium = scored.counts.medium,
        low = scored.counts.low,
        "scored dataset"
    );

    let paths = &settings.paths;
    let mut artifacts = Vec::with_capacity(ArtifactPaths::ORDER.len());

    artifacts.push(write_stage(
        ArtifactKind::RiskMatrixChart,
        &paths.risk_matrix_chart,
        |path| charts::write_risk_matrix(&dataset, path),
    )?);
    artifacts.push(write_stage(
        ArtifactKind::ScoreDistributionChart,
        &paths.score_distribution_chart,
        |path| charts::write_score_distribution(&scored.histogram, path),
    )?);
    artifacts.push(write_stage(
        ArtifactKind::Spreadsheet,
        &paths.spreadsheet,
        |path| spreadsheet::write_spreadsheet(&dataset, path),
    )?);

    let report = compose_report(&scored, settings.cover.clone());
    tracing::info!(sections = report.sections.len(), "composed report");

    artifacts.push(write_stage(
        ArtifactKind::Document,
        &paths.document,
        |path| document::write_document(&report, path),
    )?);

    Ok(RunSummary {
        records: dataset.len(),
        seed: settings.seed,
        counts: scored.counts,
        artifacts,
    })
}

fn write_stage(
    kind: ArtifactKind,
    path: &Path,
    write: impl FnOnce(&Path) -> Result<(), ExportError>,
) -> anyhow::Result<ArtifactRecord> {
    let progress = Progress::spinner(&format!("writing {kind}"));
    match write(path) {
        Ok(()) => {
            progress.finish_ok(&format!("wrote {}", path.display()));
            tracing::info!(artifact = %kind, path = %path.display(), "artifact written");
            Ok(ArtifactRecord {
                kind,
                path: path.display().to_string(),
            })
        }
        Err(error) => {
            progress.finish_err(&format!("failed to write {kind}"));
            Err(error).with_context(|| format!("failed to write {kind}"))
        }
    }
}
