//! Error types for Gamer Tags

use thiserror::Error;

/// Main error type for Gamer Tags operations
#[derive(Error, Debug)]
pub enum GamerTagsError {
    /// Error during storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A platform or theme name that is not part of the fixed set
    #[error(transparent)]
    UnknownName(#[from] ParseNameError),

    /// The system clipboard rejected the write or is unavailable
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// The native share capability failed
    #[error("Share error: {0}")]
    Share(String),
}

/// Failure to parse one of the closed enumerations by name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseNameError {
    /// What was being parsed ("platform", "theme")
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

/// Result type alias using GamerTagsError
pub type Result<T> = std::result::Result<T, GamerTagsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GamerTagsError::Clipboard("no display".to_string());
        assert_eq!(format!("{}", err), "Clipboard error: no display");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GamerTagsError = io_err.into();
        assert!(matches!(err, GamerTagsError::Io(_)));
    }

    #[test]
    fn test_parse_name_error_is_transparent() {
        let err: GamerTagsError = ParseNameError {
            kind: "platform",
            value: "atari".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "unknown platform: \"atari\"");
    }
}
