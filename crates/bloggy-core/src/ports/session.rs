//! Durable key/value storage for the auth marker.

use async_trait::async_trait;

use crate::error::MarkerError;

/// A tiny persistent string map, the server-side stand-in for browser local storage.
#[async_trait]
pub trait MarkerStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>, MarkerError>;

    async fn save(&self, key: &str, value: &str) -> Result<(), MarkerError>;

    /// Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), MarkerError>;
}
