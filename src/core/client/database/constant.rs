/// Collection holding the vitals time-series documents.
pub const VITALS_COLLECTION: &str = "vitals";

/// Time-partition key of each reading.
pub const TIME_FIELD: &str = "timestamp";

/// Grouping/metadata key readings are bucketed by.
pub const META_FIELD: &str = "patientId";
