use std::time::Duration;

/// Declared shape of a time-series collection.
///
/// Mirrors what `listCollections` reports for an existing collection, so the
/// same type describes both the desired schema and a deployed one.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSchema {
    /// The time-partition key of each document.
    pub time_field: String,
    /// The grouping/metadata key documents are bucketed by.
    pub meta_field: Option<String>,
    /// Bucketing hint about expected inter-write spacing.
    pub granularity: Option<Granularity>,
    /// Retention horizon after which the server may delete a document
    /// without notice.
    pub expire_after: Option<Duration>,
}

/// Bucketing granularity hint for a time-series collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Seconds,
    Minutes,
    Hours,
}

/// What the server reported for an already-existing collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ExistingCollection {
    /// A time-series collection with the given declared shape.
    TimeSeries(CollectionSchema),
    /// A plain collection or a view. Always a conflict for our purposes.
    Other,
}
