pub mod run;
pub mod score;
pub mod summary;

use risk_config::RiskConfig;

use crate::cli::{Commands, GenerationArgs, GlobalFlags};

/// Route a parsed command to its handler.
pub fn dispatch(command: Commands, config: RiskConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Run(args) => run::handle(&args, config, flags),
        Commands::Score(args) => score::handle(&args, config, flags),
        Commands::Summary(args) => summary::handle(&args, config, flags),
    }
}

/// CLI flags win over configured generation settings.
pub fn apply_generation_args(config: &mut RiskConfig, args: &GenerationArgs) {
    if let Some(count) = args.count {
        config.generation.count = count;
    }
    if let Some(seed) = args.seed {
        config.generation.seed = Some(seed);
    }
}
