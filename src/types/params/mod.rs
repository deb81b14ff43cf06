use crate::cli::SetupCmd;
use crate::error::{SetupError, SetupResult};
use crate::types::vitals::{self, SeedReading};
use std::path::PathBuf;
use url::Url;

/// DatabaseArgs - Arguments used to connect to the target database
#[derive(Debug, Clone)]
pub struct DatabaseArgs {
    pub connection_uri: String,
    pub database_name: String,
}

/// SeedArgs - Arguments controlling demonstration-data insertion
#[derive(Debug, Clone)]
pub struct SeedArgs {
    pub seed_file: Option<PathBuf>,
    pub skip: bool,
    pub idempotent: bool,
}

impl TryFrom<SetupCmd> for DatabaseArgs {
    type Error = SetupError;
    fn try_from(setup_cmd: SetupCmd) -> Result<Self, Self::Error> {
        let uri = setup_cmd.mongodb_args.mongodb_connection_url;
        Url::parse(&uri).map_err(|e| {
            SetupError::SetupCommandError(format!("Invalid MongoDB connection URL '{}': {}", uri, e))
        })?;
        if setup_cmd.mongodb_args.mongodb_database_name.is_empty() {
            return Err(SetupError::SetupCommandError("Database name is required".to_string()));
        }
        Ok(Self { connection_uri: uri, database_name: setup_cmd.mongodb_args.mongodb_database_name })
    }
}

impl TryFrom<SetupCmd> for SeedArgs {
    type Error = SetupError;
    fn try_from(setup_cmd: SetupCmd) -> Result<Self, Self::Error> {
        Ok(Self {
            seed_file: setup_cmd.seed_args.seed_file,
            skip: setup_cmd.seed_args.skip_seed,
            idempotent: setup_cmd.seed_args.idempotent_seed,
        })
    }
}

impl SeedArgs {
    /// Records to insert: the seed file when given, the built-in demo
    /// records otherwise.
    pub fn records(&self) -> SetupResult<Vec<SeedReading>> {
        match &self.seed_file {
            Some(path) => vitals::load_seed_file(path),
            None => Ok(vitals::default_seed_records()),
        }
    }
}
