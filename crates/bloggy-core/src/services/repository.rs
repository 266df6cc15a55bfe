//! Typed façade between controllers and the store.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Post, PostChanges, PostFields};
use crate::error::PostError;
use crate::ports::{ListQuery, PostStore};

/// Post repository - classifies store failures and logs them once.
///
/// There is no caching: a successful `create`/`update` returns exactly what the
/// store reported, which is what the next `get` will see.
#[derive(Clone)]
pub struct PostRepository {
    store: Arc<dyn PostStore>,
}

impl PostRepository {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Post>, PostError> {
        tracing::debug!(category = ?query.category, order = ?query.order, "Listing posts");

        self.store.list(query).await.map_err(|e| {
            tracing::warn!(error = %e, "Listing posts failed");
            PostError::from_store(e, None)
        })
    }

    pub async fn list_all(&self) -> Result<Vec<Post>, PostError> {
        self.list(&ListQuery::newest_first()).await
    }

    pub async fn list_in_category(&self, term: &str) -> Result<Vec<Post>, PostError> {
        self.list(&ListQuery::in_category(term)).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, PostError> {
        self.store.get(id).await.map_err(|e| {
            tracing::warn!(post_id = %id, error = %e, "Fetching post failed");
            PostError::from_store(e, Some(id))
        })
    }

    pub async fn create(&self, fields: PostFields) -> Result<Post, PostError> {
        let post = self.store.create(fields).await.map_err(|e| {
            tracing::warn!(error = %e, "Creating post failed");
            PostError::from_store(e, None)
        })?;

        tracing::info!(post_id = %post.id, "Post created");
        Ok(post)
    }

    pub async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, PostError> {
        if changes.is_empty() {
            return self.get(id).await;
        }

        let post = self.store.update(id, changes).await.map_err(|e| {
            tracing::warn!(post_id = %id, error = %e, "Updating post failed");
            PostError::from_store(e, Some(id))
        })?;

        tracing::info!(post_id = %id, "Post updated");
        Ok(post)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), PostError> {
        self.store.delete(id).await.map_err(|e| {
            tracing::warn!(post_id = %id, error = %e, "Deleting post failed");
            PostError::from_store(e, Some(id))
        })?;

        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }
}
