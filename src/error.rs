use std::fmt;

/// Error type for data proxy operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A seed record's identity was missing or left at the key type's
    /// default value.
    InvalidSeed {
        record: &'static str,
        field: &'static str,
    },
    /// Two seed records share an identity, or a computed next ID is
    /// already occupied.
    DuplicateId { id: String },
    /// No record exists for the requested identity.
    NotFound { id: String },
    /// An update carried a version token that does not match the stored
    /// token.
    VersionConflict { record: &'static str, id: String },
    /// An internal lock was poisoned by a panicking thread.
    LockPoisoned(&'static str),
    /// Record (de)serialization failed at the store boundary.
    Serde(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidSeed { record, field } => {
                write!(f, "all values for {}.{} must be supplied", record, field)
            }
            StoreError::DuplicateId { id } => {
                write!(f, "duplicate ids are not allowed: id {}", id)
            }
            StoreError::NotFound { id } => write!(f, "no record found for id {}", id),
            StoreError::VersionConflict { record, id } => write!(
                f,
                "cannot find a matching version for supplied {} with id {}",
                record, id
            ),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::Serde(msg) => write!(f, "record serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
