//! Application configuration loaded from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use bloggy_core::services::DEFAULT_ADMIN_PASSWORD;

use crate::telemetry::TelemetryConfig;

/// Which post store backs the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Hosted PostgREST table (Supabase).
    Rest {
        base_url: String,
        api_key: String,
        table: String,
    },
    /// Direct PostgreSQL connection.
    Postgres {
        url: String,
        max_connections: u32,
        min_connections: u32,
    },
    InMemory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
    pub admin_password: String,
    pub auth_marker_path: PathBuf,
    pub sanitize_content: bool,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parsed(&lookup, "PORT", 8080),
            store: Self::store_from(&lookup),
            admin_password: lookup("ADMIN_PASSWORD")
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
            auth_marker_path: lookup("AUTH_MARKER_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".bloggy/session.json")),
            sanitize_content: lookup("SANITIZE_CONTENT")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            telemetry: TelemetryConfig::from_lookup(&lookup),
        }
    }

    /// First match wins: REST credentials, then a database URL, then in-memory.
    fn store_from(lookup: &impl Fn(&str) -> Option<String>) -> StoreConfig {
        if let (Some(base_url), Some(api_key)) = (lookup("SUPABASE_URL"), lookup("SUPABASE_ANON_KEY"))
        {
            return StoreConfig::Rest {
                base_url,
                api_key,
                table: lookup("SUPABASE_TABLE").unwrap_or_else(|| "blogs".to_string()),
            };
        }

        if let Some(url) = lookup("DATABASE_URL") {
            return StoreConfig::Postgres {
                url,
                max_connections: parsed(lookup, "DB_MAX_CONNECTIONS", 10),
                min_connections: parsed(lookup, "DB_MIN_CONNECTIONS", 1),
            };
        }

        StoreConfig::InMemory
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key).and_then(|s| s.parse().ok()).unwrap_or(default)
}
