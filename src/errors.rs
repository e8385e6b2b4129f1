use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The underlying storage could not be opened or initialized. Fatal to
    /// every subsequent operation until resolved; callers surface it, they
    /// do not retry.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// An insert violated the primary key or a unique secondary index.
    /// Recoverable: callers fall back to an update/upsert or report it.
    #[error("Duplicate key in collection '{collection}': {detail}")]
    DuplicateKey { collection: String, detail: String },

    #[error("Unknown collection '{0}'")]
    UnknownCollection(String),

    #[error("Unknown index '{index}' on collection '{collection}'")]
    UnknownIndex { collection: String, index: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
