pub mod constant;
pub mod error;
pub mod mongo_client;

use crate::types::schema::{CollectionSchema, ExistingCollection};
use crate::types::vitals::VitalReading;
use async_trait::async_trait;
pub use error::DatabaseError;
use mongodb::IndexModel;

/// Trait defining the schema-provisioning operations the bootstrap sequence needs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchemaStore: Send + Sync {
    /// ping - Round-trip connectivity check against the target database
    async fn ping(&self) -> Result<(), DatabaseError>;

    /// collection_spec - Declared options of an existing collection, `None` if it does not exist
    async fn collection_spec(&self, name: &str) -> Result<Option<ExistingCollection>, DatabaseError>;

    /// create_timeseries_collection - Create a time-series collection with the given shape
    async fn create_timeseries_collection(
        &self,
        name: &str,
        schema: CollectionSchema,
    ) -> Result<(), DatabaseError>;

    /// create_indexes - Ensure the given secondary indexes exist
    async fn create_indexes(&self, name: &str, indexes: Vec<IndexModel>) -> Result<(), DatabaseError>;

    /// insert_readings - Append readings to the collection
    async fn insert_readings(&self, name: &str, readings: Vec<VitalReading>) -> Result<(), DatabaseError>;

    /// count_readings_for_patients - Number of stored readings belonging to any of the given patients
    async fn count_readings_for_patients(
        &self,
        name: &str,
        patient_ids: Vec<String>,
    ) -> Result<u64, DatabaseError>;
}
