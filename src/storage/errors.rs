use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to open note database: {0}")]
    Setup(#[source] sqlx::Error),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("failed to encode timestamp: {0}")]
    TimestampEncode(#[from] time::error::Format),
}
