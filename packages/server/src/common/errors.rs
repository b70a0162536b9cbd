use thiserror::Error;

/// Errors surfaced by the ingest, scoring and notify flows
#[derive(Error, Debug)]
pub enum BuyerError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage error: {0}")]
    Storage(anyhow::Error),
}

pub type BuyerResult<T> = std::result::Result<T, BuyerError>;

impl BuyerError {
    /// Prefix a validation message with the position of the offending batch item.
    pub fn at_index(self, index: usize) -> Self {
        match self {
            BuyerError::Validation(msg) => BuyerError::Validation(format!("item {}: {}", index, msg)),
            other => other,
        }
    }
}

impl From<anyhow::Error> for BuyerError {
    fn from(err: anyhow::Error) -> Self {
        // Pool and socket failures: the backend is unreachable
        let unreachable = matches!(
            err.downcast_ref::<sqlx::Error>(),
            Some(sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_))
        );
        if unreachable {
            BuyerError::StorageUnavailable(err.to_string())
        } else {
            BuyerError::Storage(err)
        }
    }
}
