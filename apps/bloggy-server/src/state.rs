//! Application state - shared across all handlers.

use std::sync::Arc;

use bloggy_core::controllers::AdminController;
use bloggy_core::ports::{ContentSanitizer, MarkerStore, PassthroughSanitizer, PostStore};
use bloggy_core::services::{AuthSession, PostRepository};
use bloggy_infra::{AmmoniaSanitizer, FileMarkerStore, InMemoryPostStore};

use crate::config::{AppConfig, StoreConfig};

/// Shared application state.
///
/// Public screens build a fresh controller per request. The admin dashboard
/// keeps one controller so its locally-updated list outlives a request.
#[derive(Clone)]
pub struct AppState {
    pub repo: PostRepository,
    pub session: Arc<AuthSession>,
    pub admin: Arc<AdminController>,
    pub sanitizer: Arc<dyn ContentSanitizer>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let store = build_store(&config.store).await;

        let markers: Arc<dyn MarkerStore> =
            Arc::new(FileMarkerStore::new(config.auth_marker_path.clone()));
        let session = AuthSession::restore(markers, config.admin_password.clone()).await;

        let sanitizer: Arc<dyn ContentSanitizer> = if config.sanitize_content {
            Arc::new(AmmoniaSanitizer::new())
        } else {
            tracing::warn!("Content sanitization disabled; post HTML is served verbatim");
            Arc::new(PassthroughSanitizer)
        };

        tracing::info!("Application state initialized");
        Self::from_parts(store, Arc::new(session), sanitizer)
    }

    pub fn from_parts(
        store: Arc<dyn PostStore>,
        session: Arc<AuthSession>,
        sanitizer: Arc<dyn ContentSanitizer>,
    ) -> Self {
        let repo = PostRepository::new(store);
        Self {
            admin: Arc::new(AdminController::new(repo.clone())),
            repo,
            session,
            sanitizer,
        }
    }
}

fn in_memory() -> Arc<dyn PostStore> {
    Arc::new(InMemoryPostStore::new())
}

async fn build_store(config: &StoreConfig) -> Arc<dyn PostStore> {
    match config {
        StoreConfig::Rest {
            base_url,
            api_key,
            table,
        } => rest_store(base_url, api_key, table),
        StoreConfig::Postgres {
            url,
            max_connections,
            min_connections,
        } => postgres_store(url, *max_connections, *min_connections).await,
        StoreConfig::InMemory => {
            tracing::warn!("No post store configured. Running in in-memory mode.");
            in_memory()
        }
    }
}

#[cfg(feature = "rest")]
fn rest_store(base_url: &str, api_key: &str, table: &str) -> Arc<dyn PostStore> {
    use bloggy_infra::{RestPostStore, RestStoreConfig};

    let config = RestStoreConfig {
        base_url: base_url.to_string(),
        api_key: api_key.to_string(),
        table: table.to_string(),
    };
    match RestPostStore::new(config) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build REST store. Using in-memory fallback.");
            in_memory()
        }
    }
}

#[cfg(not(feature = "rest"))]
fn rest_store(_base_url: &str, _api_key: &str, _table: &str) -> Arc<dyn PostStore> {
    tracing::error!("REST store configured but the `rest` feature is disabled. Using in-memory fallback.");
    in_memory()
}

#[cfg(feature = "postgres")]
async fn postgres_store(url: &str, max_connections: u32, min_connections: u32) -> Arc<dyn PostStore> {
    use bloggy_infra::database::{DatabaseConfig, PostgresPostStore, connect};

    let config = DatabaseConfig {
        url: url.to_string(),
        max_connections,
        min_connections,
    };
    match connect(&config).await {
        Ok(conn) => Arc::new(PostgresPostStore::new(conn)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database. Using in-memory fallback.");
            in_memory()
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn postgres_store(_url: &str, _max: u32, _min: u32) -> Arc<dyn PostStore> {
    tracing::error!("DATABASE_URL set but the `postgres` feature is disabled. Using in-memory fallback.");
    in_memory()
}
