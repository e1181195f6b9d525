use thiserror::Error;

pub type Result<T> = std::result::Result<T, DjError>;

#[derive(Debug, Error)]
pub enum DjError {
    #[error("Storage error: {0}")]
    Storage(#[from] redb::Error),

    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Storage operation error: {0}")]
    StorageOperation(#[from] redb::StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupt value under key '{key}': {reason}")]
    Corrupt { key: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl DjError {
    /// True for errors caused by bad caller input rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(self, DjError::Validation(_))
    }
}

/// Failure of the external text-generation call.
///
/// Never shown to HTTP callers; the briefing service swaps in the fallback.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Generator '{provider}' unreachable: {message}")]
    Unreachable { provider: String, message: String },

    #[error("Generator '{provider}' returned HTTP {status}: {body}")]
    Http {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Generator '{provider}' returned a malformed response: {message}")]
    Malformed { provider: String, message: String },

    #[error("Generator '{provider}' returned no text")]
    Empty { provider: String },

    #[error("Text generation is disabled")]
    Disabled,
}
