use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate, score, and write charts, spreadsheet, and report.
    Run(RunArgs),
    /// Generate and score records without writing any files.
    Score(GenerationArgs),
    /// Print severity counts and the score histogram without writing any files.
    Summary(GenerationArgs),
}

/// Dataset generation overrides shared by every command.
#[derive(Clone, Debug, Default, Args)]
pub struct GenerationArgs {
    /// Number of records to generate (zero or negative yields an empty dataset)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Seed for a reproducible dataset
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub generation: GenerationArgs,

    /// Directory the artifacts are written to
    #[arg(short, long)]
    pub out_dir: Option<String>,
}
