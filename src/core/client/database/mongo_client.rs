use super::constant::META_FIELD;
use super::error::DatabaseError;
use super::SchemaStore;
use crate::types::params::DatabaseArgs;
use crate::types::schema::{CollectionSchema, ExistingCollection, Granularity};
use crate::types::vitals::VitalReading;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{CreateCollectionOptions, TimeseriesGranularity, TimeseriesOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use std::sync::Arc;
use tracing::debug;

/// MongoDB-backed schema store
pub struct MongoDbClient {
    client: Client,
    database: Arc<Database>,
}

impl MongoDbClient {
    pub async fn new(config: &DatabaseArgs) -> Result<Self, DatabaseError> {
        let client = Client::with_uri_str(&config.connection_uri).await?;
        let database = Arc::new(client.database(&config.database_name));
        Ok(Self { client, database })
    }

    /// Mongodb client uses Arc internally, reducing the cost of clone.
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }
}

#[async_trait]
impl SchemaStore for MongoDbClient {
    async fn ping(&self) -> Result<(), DatabaseError> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    async fn collection_spec(&self, name: &str) -> Result<Option<ExistingCollection>, DatabaseError> {
        let mut cursor = self.database.list_collections(doc! { "name": name }, None).await?;
        let Some(spec) = cursor.try_next().await? else {
            return Ok(None);
        };

        let options = spec.options;
        let existing = match options.timeseries {
            Some(ts) => ExistingCollection::TimeSeries(CollectionSchema {
                time_field: ts.time_field,
                meta_field: ts.meta_field,
                granularity: ts.granularity.map(granularity_from_driver),
                expire_after: options.expire_after_seconds,
            }),
            None => ExistingCollection::Other,
        };
        debug!(collection = name, existing = ?existing, "Fetched collection specification");
        Ok(Some(existing))
    }

    async fn create_timeseries_collection(
        &self,
        name: &str,
        schema: CollectionSchema,
    ) -> Result<(), DatabaseError> {
        let timeseries = TimeseriesOptions::builder()
            .time_field(schema.time_field)
            .meta_field(schema.meta_field)
            .granularity(schema.granularity.map(granularity_to_driver))
            .build();
        let options = CreateCollectionOptions::builder()
            .timeseries(timeseries)
            .expire_after_seconds(schema.expire_after)
            .build();

        self.database.create_collection(name, options).await?;
        debug!(collection = name, "Time-series collection created");
        Ok(())
    }

    async fn create_indexes(&self, name: &str, indexes: Vec<IndexModel>) -> Result<(), DatabaseError> {
        let index_count = indexes.len();
        self.collection::<VitalReading>(name).create_indexes(indexes, None).await?;
        debug!(collection = name, index_count, "Indexes created");
        Ok(())
    }

    async fn insert_readings(&self, name: &str, readings: Vec<VitalReading>) -> Result<(), DatabaseError> {
        let reading_count = readings.len();
        self.collection::<VitalReading>(name).insert_many(readings, None).await?;
        debug!(collection = name, reading_count, "Readings inserted");
        Ok(())
    }

    async fn count_readings_for_patients(
        &self,
        name: &str,
        patient_ids: Vec<String>,
    ) -> Result<u64, DatabaseError> {
        let filter = doc! { META_FIELD: { "$in": patient_ids } };
        Ok(self.collection::<VitalReading>(name).count_documents(filter, None).await?)
    }
}

fn granularity_from_driver(granularity: TimeseriesGranularity) -> Granularity {
    match granularity {
        TimeseriesGranularity::Seconds => Granularity::Seconds,
        TimeseriesGranularity::Minutes => Granularity::Minutes,
        // Only three bucketing hints exist today; anything newer is
        // necessarily not `seconds`, which is all the compatibility check
        // cares about.
        _ => Granularity::Hours,
    }
}

fn granularity_to_driver(granularity: Granularity) -> TimeseriesGranularity {
    match granularity {
        Granularity::Seconds => TimeseriesGranularity::Seconds,
        Granularity::Minutes => TimeseriesGranularity::Minutes,
        Granularity::Hours => TimeseriesGranularity::Hours,
    }
}
