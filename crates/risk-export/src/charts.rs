//! Chart sinks.
//!
//! Both charts are written as self-contained plotly HTML pages. The histogram
//! draws the pre-computed [`ScoreHistogram`] buckets as bars so the rendered
//! bins are exactly the five the scorer produced.

use std::path::Path;

use plotly::color::NamedColor;
use plotly::common::{Line, Marker, Mode, Title};
use plotly::layout::Axis;
use plotly::{Bar, Layout, Plot, Scatter};
use risk_core::entities::{RiskDataset, ScoreHistogram};

use crate::{ExportError, write_file};

pub const RISK_MATRIX_TITLE: &str = "Risk Matrix (Likelihood vs. Impact)";
pub const SCORE_DISTRIBUTION_TITLE: &str = "Distribution of Risk Scores";

/// Scatter of likelihood (x) against impact (y), one marker per record.
#[must_use]
pub fn risk_matrix_plot(dataset: &RiskDataset) -> Plot {
    let likelihood: Vec<u8> = dataset.iter().map(|r| r.likelihood).collect();
    let impact: Vec<u8> = dataset.iter().map(|r| r.impact).collect();
    let ids: Vec<String> = dataset.iter().map(|r| r.id.clone()).collect();

    let trace = Scatter::new(likelihood, impact)
        .mode(Mode::Markers)
        .name("Risks")
        .text_array(ids)
        .marker(Marker::new().color(NamedColor::Red).size(14).opacity(0.6));

    let layout = Layout::new()
        .title(Title::from(RISK_MATRIX_TITLE))
        .x_axis(factor_axis("Likelihood (1-5)"))
        .y_axis(factor_axis("Impact (1-5)"));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Bar chart of the five score buckets.
#[must_use]
pub fn score_distribution_plot(histogram: &ScoreHistogram) -> Plot {
    let labels: Vec<String> = histogram.bins.iter().map(|bin| bin.label()).collect();
    let counts: Vec<usize> = histogram.bins.iter().map(|bin| bin.count).collect();

    let trace = Bar::new(labels, counts).name("Risk scores").marker(
        Marker::new()
            .color(NamedColor::Blue)
            .opacity(0.7)
            .line(Line::new().color(NamedColor::Black).width(1.0)),
    );

    let layout = Layout::new()
        .title(Title::from(SCORE_DISTRIBUTION_TITLE))
        .x_axis(Axis::new().title(Title::from("Risk Score")))
        .y_axis(
            Axis::new()
                .title(Title::from("Frequency"))
                .show_grid(true)
                .dtick(1.0),
        );

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Render and write the risk matrix chart.
///
/// # Errors
///
/// Returns [`ExportError::Io`] when `path` cannot be written.
pub fn write_risk_matrix(dataset: &RiskDataset, path: &Path) -> Result<(), ExportError> {
    write_file(path, &risk_matrix_plot(dataset).to_html())
}

/// Render and write the score distribution chart.
///
/// # Errors
///
/// Returns [`ExportError::Io`] when `path` cannot be written.
pub fn write_score_distribution(
    histogram: &ScoreHistogram,
    path: &Path,
) -> Result<(), ExportError> {
    write_file(path, &score_distribution_plot(histogram).to_html())
}

fn factor_axis(title: &str) -> Axis {
    Axis::new()
        .title(Title::from(title))
        .range(vec![0.5, 5.5])
        .dtick(1.0)
        .show_grid(true)
}
