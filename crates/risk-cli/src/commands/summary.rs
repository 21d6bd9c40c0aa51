use risk_config::RiskConfig;
use risk_core::composer::{TOTAL_LABEL, severity_label};
use risk_core::enums::Severity;
use risk_core::generator::generate_dataset;
use risk_core::responses::SummaryResponse;
use risk_core::scoring::score_dataset;

use crate::cli::{GenerationArgs, GlobalFlags, OutputFormat};
use crate::output::{output, table};
use crate::ui;

/// Handle `riskgen summary`.
pub fn handle(
    args: &GenerationArgs,
    mut config: RiskConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    super::apply_generation_args(&mut config, args);
    let dataset = generate_dataset(config.generation.count, config.generation.seed);
    let scored = score_dataset(&dataset);
    let response = SummaryResponse {
        counts: scored.counts,
        histogram: scored.histogram,
    };

    if flags.format == OutputFormat::Table {
        println!("{}", render_summary_table(&response));
        return Ok(());
    }
    output(&response, flags.format)
}

fn render_summary_table(response: &SummaryResponse) -> String {
    let options = table::TableOptions {
        color: ui::prefs().table_color,
    };

    let mut count_rows = vec![vec![TOTAL_LABEL.to_string(), response.counts.total.to_string()]];
    count_rows.extend(
        [Severity::High, Severity::Medium, Severity::Low]
            .into_iter()
            .map(|s| vec![severity_label(s), response.counts.get(s).to_string()]),
    );

    let bin_rows = response
        .histogram
        .bins
        .iter()
        .map(|bin| vec![bin.label(), bin.count.to_string()])
        .collect::<Vec<_>>();

    format!(
        "{}\n\n{}",
        table::render_table(&["metric", "count"], &count_rows, options),
        table::render_table(&["risk_score", "frequency"], &bin_rows, options)
    )
}
