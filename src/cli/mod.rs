use clap::{Parser, Subcommand};

pub mod database;
pub mod seed;

#[derive(Parser, Debug)]
#[command(
    name = "vitals-bootstrap",
    about = "Vitals Bootstrap - time-series schema provisioning for the vitals database",
    long_about = "Vitals Bootstrap provisions the vitals time-series collection, its secondary \
    indexes and optional demonstration data on a target MongoDB server.\n\n\
    Quick Start:\n  \
    vitals-bootstrap setup",
    after_help = "Examples:\n  \
    vitals-bootstrap setup\n  \
    vitals-bootstrap setup --mongodb-connection-url mongodb://mongo:27017 --mongodb-database-name vitals_db\n  \
    vitals-bootstrap setup --seed-file ./seed.json --idempotent-seed"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Setup the vitals database schema
    #[command(long_about = "Provision the vitals time-series collection and its indexes.\n\n\
        Runs once at environment provisioning time. Collection and index creation are \
        idempotent; seed insertion appends on every run unless --idempotent-seed is given.")]
    Setup {
        #[command(flatten)]
        setup_command: Box<SetupCmd>,
    },
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct SetupCmd {
    #[clap(flatten, next_help_heading = None)]
    pub mongodb_args: database::MongoDBCliArgs,

    #[clap(flatten, next_help_heading = None)]
    pub seed_args: seed::SeedCliArgs,
}
