use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{CategoryFilter, Post, PostChanges, PostFields};
use crate::error::StoreError;

/// Sort order over `created_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    #[default]
    NewestFirst,
    OldestFirst,
}

/// Parameters of a list call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub order: Order,
    pub category: Option<CategoryFilter>,
}

impl ListQuery {
    /// Every post, newest first.
    pub fn newest_first() -> Self {
        Self::default()
    }

    /// Posts whose category contains `term`, case-insensitively.
    pub fn in_category(term: impl Into<String>) -> Self {
        Self {
            order: Order::NewestFirst,
            category: Some(CategoryFilter::new(term)),
        }
    }
}

/// Row-level access to the one collection of posts.
///
/// Every call is a single round trip: no retries, batching or pagination.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts matching the query, ordered by `created_at`.
    async fn list(&self, query: &ListQuery) -> Result<Vec<Post>, StoreError>;

    /// Exactly one post, or `StoreError::NotFound`.
    async fn get(&self, id: Uuid) -> Result<Post, StoreError>;

    /// Insert a row; the store assigns `id` and `created_at`.
    async fn create(&self, fields: PostFields) -> Result<Post, StoreError>;

    /// Replace the present fields of the row matching `id`.
    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, StoreError>;

    /// Remove the row matching `id`. Stores may report `NotFound` for an absent id.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
