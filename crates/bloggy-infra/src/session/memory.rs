use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use bloggy_core::error::MarkerError;
use bloggy_core::ports::MarkerStore;

/// Marker store that forgets everything on restart.
#[derive(Default)]
pub struct InMemoryMarkerStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryMarkerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MarkerStore for InMemoryMarkerStore {
    async fn load(&self, key: &str) -> Result<Option<String>, MarkerError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), MarkerError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), MarkerError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}
