use crate::cli::SetupCmd;
use crate::core::client::database::constant::VITALS_COLLECTION;
use crate::core::client::database::mongo_client::MongoDbClient;
use crate::core::client::database::{DatabaseError, SchemaStore};
use crate::error::{SetupError, SetupResult};
use crate::types::params::{DatabaseArgs, SeedArgs};
use crate::types::vitals::VitalReading;
use chrono::Utc;
use tracing::{debug, info, warn};

pub mod schema;

/// Setup function that provisions the vitals schema on the target database
pub async fn setup(setup_cmd: &SetupCmd) -> SetupResult<()> {
    let database_params = DatabaseArgs::try_from(setup_cmd.clone())?;
    let seed_params = SeedArgs::try_from(setup_cmd.clone())?;

    debug!("Database Params: {:?}", database_params);
    debug!("Seed Params: {:?}", seed_params);

    info!(database = %database_params.database_name, "Setting up vitals database schema...");

    let client = MongoDbClient::new(&database_params).await.map_err(classify)?;
    bootstrap(&client, &seed_params).await
}

/// Runs the bootstrap sequence: connectivity check, collection provisioning,
/// index provisioning, seed insertion. The four effects reach the server in
/// program order; the ping-first ordering guarantees an unreachable server
/// leaves no partial state behind.
pub async fn bootstrap(store: &dyn SchemaStore, seed: &SeedArgs) -> SetupResult<()> {
    store.ping().await.map_err(|e| SetupError::ConnectionError(e.to_string()))?;

    provision_collection(store).await?;
    provision_indexes(store).await?;
    info!("Time-series collection created successfully");

    if seed.skip {
        info!("Seed insertion disabled, skipping");
        return Ok(());
    }
    if seed_collection(store, seed).await? {
        info!("Sample data inserted");
    }
    Ok(())
}

/// Ensure the vitals time-series collection exists with the declared shape.
/// Re-running against an identically-configured collection is a no-op.
async fn provision_collection(store: &dyn SchemaStore) -> SetupResult<()> {
    match store.collection_spec(VITALS_COLLECTION).await.map_err(classify)? {
        Some(existing) => {
            schema::ensure_compatible(&existing)?;
            warn!(collection = VITALS_COLLECTION, "Collection already exists, skipping creation");
            Ok(())
        }
        None => {
            info!(collection = VITALS_COLLECTION, "Creating time-series collection");
            store
                .create_timeseries_collection(VITALS_COLLECTION, schema::vitals_schema())
                .await
                .map_err(classify)
        }
    }
}

/// Ensure both secondary indexes exist. The server treats re-creation of an
/// identical index as a no-op and reports a conflict code otherwise.
async fn provision_indexes(store: &dyn SchemaStore) -> SetupResult<()> {
    store.create_indexes(VITALS_COLLECTION, schema::vitals_indexes()).await.map_err(classify)
}

/// Insert the seed readings, stamped with the current wall clock. Returns
/// whether anything was inserted.
async fn seed_collection(store: &dyn SchemaStore, seed: &SeedArgs) -> SetupResult<bool> {
    let records = seed.records()?;
    if records.is_empty() {
        warn!("Seed record set is empty, nothing to insert");
        return Ok(false);
    }

    if seed.idempotent {
        // Time-series collections reject upserts, so idempotence is a
        // presence check on the seed patients rather than $setOnInsert.
        let patient_ids: Vec<String> = records.iter().map(|r| r.patient_id.clone()).collect();
        let existing =
            store.count_readings_for_patients(VITALS_COLLECTION, patient_ids).await.map_err(classify)?;
        if existing > 0 {
            info!(existing, "Seed patients already have readings, skipping seed insertion");
            return Ok(false);
        }
    }

    let now = Utc::now();
    let readings: Vec<VitalReading> = records.into_iter().map(|r| r.into_reading(now)).collect();
    store
        .insert_readings(VITALS_COLLECTION, readings)
        .await
        .map_err(|e| SetupError::InsertError(e.to_string()))?;
    Ok(true)
}

fn classify(err: DatabaseError) -> SetupError {
    if err.is_schema_conflict() {
        SetupError::SchemaConflictError(err.to_string())
    } else if err.is_connection_failure() {
        SetupError::ConnectionError(err.to_string())
    } else {
        SetupError::DatabaseError(err)
    }
}
