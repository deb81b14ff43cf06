use crate::core::client::database::constant::{META_FIELD, TIME_FIELD, VITALS_COLLECTION};
use crate::error::SetupError;
use crate::types::schema::{CollectionSchema, ExistingCollection, Granularity};
use mongodb::bson::doc;
use mongodb::IndexModel;
use std::time::Duration;

/// Retention horizon: 30 days from each reading's timestamp, after which the
/// server may delete the reading without notice.
pub const RETENTION_SECONDS: u64 = 2_592_000;

/// Declared shape of the vitals collection.
pub fn vitals_schema() -> CollectionSchema {
    CollectionSchema {
        time_field: TIME_FIELD.to_string(),
        meta_field: Some(META_FIELD.to_string()),
        granularity: Some(Granularity::Seconds),
        expire_after: Some(Duration::from_secs(RETENTION_SECONDS)),
    }
}

/// The two secondary indexes the application's query patterns need:
/// latest readings for one patient, and latest readings across all patients.
pub fn vitals_indexes() -> Vec<IndexModel> {
    vec![
        IndexModel::builder().keys(doc! { META_FIELD: 1, TIME_FIELD: -1 }).build(),
        IndexModel::builder().keys(doc! { TIME_FIELD: -1 }).build(),
    ]
}

/// Compare a deployed collection against the declared schema.
pub fn ensure_compatible(existing: &ExistingCollection) -> Result<(), SetupError> {
    let schema = match existing {
        ExistingCollection::TimeSeries(schema) => schema,
        ExistingCollection::Other => {
            return Err(SetupError::SchemaConflictError(format!(
                "Collection '{}' already exists but is not a time-series collection",
                VITALS_COLLECTION
            )))
        }
    };

    let declared = vitals_schema();
    // `seconds` is the server default when no granularity was declared.
    let granularity_ok = matches!(schema.granularity, None | Some(Granularity::Seconds));
    if schema.time_field != declared.time_field
        || schema.meta_field != declared.meta_field
        || !granularity_ok
        || schema.expire_after != declared.expire_after
    {
        return Err(SetupError::SchemaConflictError(format!(
            "Collection '{}' exists with incompatible options: found {:?}, expected {:?}",
            VITALS_COLLECTION, schema, declared
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_keys_match_query_patterns() {
        let indexes = vitals_indexes();
        assert_eq!(indexes.len(), 2);
        assert_eq!(indexes[0].keys, doc! { "patientId": 1, "timestamp": -1 });
        assert_eq!(indexes[1].keys, doc! { "timestamp": -1 });
    }

    #[test]
    fn identical_schema_is_compatible() {
        let existing = ExistingCollection::TimeSeries(vitals_schema());
        assert!(ensure_compatible(&existing).is_ok());
    }

    #[test]
    fn unset_granularity_is_compatible() {
        let mut schema = vitals_schema();
        schema.granularity = None;
        assert!(ensure_compatible(&ExistingCollection::TimeSeries(schema)).is_ok());
    }

    #[test]
    fn different_meta_field_conflicts() {
        let mut schema = vitals_schema();
        schema.meta_field = Some("deviceId".to_string());
        let result = ensure_compatible(&ExistingCollection::TimeSeries(schema));
        assert!(matches!(result, Err(SetupError::SchemaConflictError(_))));
    }

    #[test]
    fn different_retention_conflicts() {
        let mut schema = vitals_schema();
        schema.expire_after = Some(Duration::from_secs(86_400));
        let result = ensure_compatible(&ExistingCollection::TimeSeries(schema));
        assert!(matches!(result, Err(SetupError::SchemaConflictError(_))));
    }

    #[test]
    fn non_timeseries_collection_conflicts() {
        let result = ensure_compatible(&ExistingCollection::Other);
        assert!(matches!(result, Err(SetupError::SchemaConflictError(_))));
    }
}
