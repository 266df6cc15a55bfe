//! Error types for the store boundary and the repository taxonomy.

use thiserror::Error;
use uuid::Uuid;

/// Failures reported by a [`PostStore`](crate::ports::PostStore) implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Post not found")]
    NotFound,

    #[error("Store unreachable: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Malformed store response: {0}")]
    Decode(String),
}

/// The small error taxonomy surfaced to view-state controllers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostError {
    #[error("Post {0} not found")]
    NotFound(Uuid),

    #[error("Transport failure: {0}")]
    TransportFailure(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl PostError {
    /// Classify a store failure. `id` is the post the call addressed, if any.
    pub fn from_store(err: StoreError, id: Option<Uuid>) -> Self {
        match (err, id) {
            (StoreError::NotFound, Some(id)) => PostError::NotFound(id),
            (StoreError::NotFound, None) => {
                PostError::Unknown("store reported not found for an unaddressed call".to_string())
            }
            (StoreError::Connection(msg), _) | (StoreError::Query(msg), _) => {
                PostError::TransportFailure(msg)
            }
            (StoreError::Rejected { status, message }, _) => {
                PostError::TransportFailure(format!("status {status}: {message}"))
            }
            (StoreError::Decode(msg), _) => PostError::Unknown(msg),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PostError::NotFound(_))
    }
}

/// Durable marker storage failures.
#[derive(Debug, Error)]
pub enum MarkerError {
    #[error("Marker storage I/O failed: {0}")]
    Io(String),

    #[error("Marker storage is corrupt: {0}")]
    Corrupt(String),
}

/// Auth session failures. Only persistence can fail; a wrong password is `Ok(false)`.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] MarkerError),
}
