//! Marker store persisted as a flat JSON object on disk.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use bloggy_core::error::MarkerError;
use bloggy_core::ports::MarkerStore;

type Markers = BTreeMap<String, String>;

/// Keeps markers in a single JSON file, e.g. `{"bloggy_auth":"authenticated"}`.
///
/// A missing file reads as empty. Writes go to a sibling temp file first and
/// are renamed into place.
pub struct FileMarkerStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileMarkerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Markers, MarkerError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Markers::new()),
            Err(e) => return Err(MarkerError::Io(e.to_string())),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Markers::new());
        }

        serde_json::from_slice(&bytes).map_err(|e| MarkerError::Corrupt(e.to_string()))
    }

    async fn write_all(&self, markers: &Markers) -> Result<(), MarkerError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| MarkerError::Io(e.to_string()))?;
        }

        let body = serde_json::to_vec_pretty(markers).map_err(|e| MarkerError::Io(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, body)
            .await
            .map_err(|e| MarkerError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| MarkerError::Io(e.to_string()))
    }
}

#[async_trait]
impl MarkerStore for FileMarkerStore {
    async fn load(&self, key: &str) -> Result<Option<String>, MarkerError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.remove(key))
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), MarkerError> {
        let _guard = self.lock.lock().await;
        let mut markers = self.read_all().await?;
        markers.insert(key.to_string(), value.to_string());
        self.write_all(&markers).await?;

        tracing::debug!(key, path = %self.path.display(), "Marker saved");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), MarkerError> {
        let _guard = self.lock.lock().await;
        let mut markers = self.read_all().await?;
        if markers.remove(key).is_none() {
            return Ok(());
        }
        self.write_all(&markers).await?;

        tracing::debug!(key, path = %self.path.display(), "Marker removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileMarkerStore {
        FileMarkerStore::new(dir.path().join("nested").join("session.json"))
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load("bloggy_auth").await.unwrap(), None);
        store.remove("bloggy_auth").await.unwrap();
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_marker_survives_reopen() {
        let dir = TempDir::new().unwrap();
        store_in(&dir)
            .save("bloggy_auth", "authenticated")
            .await
            .unwrap();

        let reopened = store_in(&dir);
        assert_eq!(
            reopened.load("bloggy_auth").await.unwrap().as_deref(),
            Some("authenticated")
        );

        reopened.remove("bloggy_auth").await.unwrap();
        assert_eq!(store_in(&dir).load("bloggy_auth").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_other_keys_are_preserved() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save("theme", "dark").await.unwrap();
        store.save("bloggy_auth", "authenticated").await.unwrap();

        store.remove("bloggy_auth").await.unwrap();

        assert_eq!(store.load("theme").await.unwrap().as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = FileMarkerStore::new(&path).load("bloggy_auth").await.unwrap_err();

        assert!(matches!(err, MarkerError::Corrupt(_)));
    }
}
