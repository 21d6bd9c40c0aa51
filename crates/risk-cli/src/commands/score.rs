use risk_config::RiskConfig;
use risk_core::entities::ScoredRecord;
use risk_core::generator::generate_dataset;
use risk_core::scoring::score_dataset;

use crate::cli::{GenerationArgs, GlobalFlags, OutputFormat};
use crate::output::{output, table};
use crate::ui;

const COLUMNS: [&str; 11] = [
    "id",
    "likelihood",
    "impact",
    "control",
    "detect",
    "financial",
    "operational",
    "reputational",
    "product",
    "risk_score",
    "severity",
];

/// Handle `riskgen score`.
pub fn handle(
    args: &GenerationArgs,
    mut config: RiskConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    super::apply_generation_args(&mut config, args);
    let dataset = generate_dataset(config.generation.count, config.generation.seed);
    let scored = score_dataset(&dataset);

    if flags.format == OutputFormat::Table {
        println!("{}", render_scored_table(&scored.records));
        return Ok(());
    }
    output(&scored.records, flags.format)
}

fn render_scored_table(records: &[ScoredRecord]) -> String {
    if records.is_empty() {
        return String::from("(no rows)");
    }

    let rows = records
        .iter()
        .map(|scored| {
            let r = &scored.record;
            vec![
                r.id.clone(),
                r.likelihood.to_string(),
                r.impact.to_string(),
                r.control_effectiveness.to_string(),
                r.detectability.to_string(),
                r.financial_impact.to_string(),
                r.operational_impact.to_string(),
                r.reputational_impact.to_string(),
                scored.product.to_string(),
                format!("{:.3}", scored.risk_score),
                scored.severity.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    table::render_table(
        &COLUMNS,
        &rows,
        table::TableOptions {
            color: ui::prefs().table_color,
        },
    )
}
