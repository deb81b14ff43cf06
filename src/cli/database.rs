use clap::Args;

/// Parameters used to connect to the target MongoDB server.
#[derive(Debug, Clone, Args)]
#[group()]
pub struct MongoDBCliArgs {
    /// The MongoDB connection string.
    #[arg(env = "VITALS_BOOTSTRAP_MONGODB_CONNECTION_URL", long, default_value = "mongodb://localhost:27017")]
    pub mongodb_connection_url: String,

    /// The target logical database.
    #[arg(env = "VITALS_BOOTSTRAP_MONGODB_DATABASE_NAME", long, default_value = "vitals_db")]
    pub mongodb_database_name: String,
}
