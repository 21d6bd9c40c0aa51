use anyhow::Context;
use risk_config::RiskConfig;

use crate::cli::{GlobalFlags, RunArgs};
use crate::output::output;
use crate::pipeline::{self, PipelineSettings};

/// Handle `riskgen run`.
pub fn handle(args: &RunArgs, mut config: RiskConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    super::apply_generation_args(&mut config, &args.generation);
    if let Some(dir) = &args.out_dir {
        config.output.dir.clone_from(dir);
    }
    config.output.validate()?;

    std::fs::create_dir_all(&config.output.dir)
        .with_context(|| format!("failed to create output directory '{}'", config.output.dir))?;

    let settings = PipelineSettings::from_config(&config, chrono::Local::now().date_naive());
    let summary = pipeline::run(&settings)?;
    output(&summary, flags.format)
}
