use mongodb::error::ErrorKind;
use thiserror::Error;

/// Server codes for a collection or index that already exists with different
/// options: NamespaceExists, IndexOptionsConflict, IndexKeySpecsConflict.
const SCHEMA_CONFLICT_CODES: [i32; 3] = [48, 85, 86];

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Mongo error: {0}")]
    MongoError(#[from] mongodb::error::Error),

    #[error("Failed to serialize document: {0}")]
    FailedToSerializeDocument(String),
}

impl DatabaseError {
    /// Whether the server rejected a creation because an incompatible
    /// collection or index already exists.
    pub fn is_schema_conflict(&self) -> bool {
        match self {
            DatabaseError::MongoError(err) => {
                matches!(err.kind.as_ref(), ErrorKind::Command(c) if SCHEMA_CONFLICT_CODES.contains(&c.code))
            }
            _ => false,
        }
    }

    /// Whether the failure happened before reaching the server.
    pub fn is_connection_failure(&self) -> bool {
        match self {
            DatabaseError::MongoError(err) => {
                matches!(err.kind.as_ref(), ErrorKind::ServerSelection { .. } | ErrorKind::Io(_))
            }
            _ => false,
        }
    }
}
