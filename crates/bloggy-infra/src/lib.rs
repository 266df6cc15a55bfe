//! # Bloggy Infrastructure
//!
//! Concrete implementations of the ports defined in `bloggy-core`.
//! This crate contains the post stores, the auth marker stores and the HTML sanitizer.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `postgres` - PostgreSQL post store via SeaORM
//! - `rest` - Hosted PostgREST (Supabase) post store via reqwest

pub mod render;
pub mod session;
pub mod store;

#[cfg(feature = "postgres")]
pub mod database;

// Re-exports - In-Memory
pub use render::AmmoniaSanitizer;
pub use session::{FileMarkerStore, InMemoryMarkerStore};
pub use store::InMemoryPostStore;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresPostStore};

#[cfg(feature = "rest")]
pub use store::{RestPostStore, RestStoreConfig};
