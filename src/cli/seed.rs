use clap::Args;
use std::path::PathBuf;

/// Parameters controlling demonstration-data insertion.
#[derive(Debug, Clone, Args)]
#[group()]
pub struct SeedCliArgs {
    /// Path to a JSON array of seed readings. The built-in demo records are
    /// used when absent.
    #[arg(env = "VITALS_BOOTSTRAP_SEED_FILE", long)]
    pub seed_file: Option<PathBuf>,

    /// Skip seed insertion entirely.
    #[arg(env = "VITALS_BOOTSTRAP_SKIP_SEED", long, default_value_t = false)]
    pub skip_seed: bool,

    /// Skip seed insertion when the seed patients already have readings.
    #[arg(env = "VITALS_BOOTSTRAP_IDEMPOTENT_SEED", long, default_value_t = false)]
    pub idempotent_seed: bool,
}
