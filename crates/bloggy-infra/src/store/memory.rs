//! In-memory post store - used when no backend is configured.

use std::cmp::Reverse;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use bloggy_core::domain::{Post, PostChanges, PostFields};
use bloggy_core::error::StoreError;
use bloggy_core::ports::{ListQuery, Order, PostStore};

struct Row {
    seq: u64,
    post: Post,
}

#[derive(Default)]
struct Table {
    next_seq: u64,
    rows: Vec<Row>,
}

impl Table {
    fn push(&mut self, post: Post) {
        self.rows.push(Row {
            seq: self.next_seq,
            post,
        });
        self.next_seq += 1;
    }
}

/// Post store backed by a `Vec` behind an async RwLock.
///
/// Rows are ordered by `created_at`, ties broken by arrival order.
/// Note: data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostStore {
    table: RwLock<Table>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding `posts`, inserted in the given order.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let mut table = Table::default();
        for post in posts {
            table.push(post);
        }
        Self {
            table: RwLock::new(table),
        }
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Post>, StoreError> {
        let table = self.table.read().await;

        let mut rows: Vec<&Row> = table
            .rows
            .iter()
            .filter(|row| {
                query
                    .category
                    .as_ref()
                    .is_none_or(|filter| filter.matches(&row.post.category))
            })
            .collect();

        match query.order {
            Order::NewestFirst => rows.sort_by_key(|row| Reverse((row.post.created_at, row.seq))),
            Order::OldestFirst => rows.sort_by_key(|row| (row.post.created_at, row.seq)),
        }

        Ok(rows.into_iter().map(|row| row.post.clone()).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Post, StoreError> {
        self.table
            .read()
            .await
            .rows
            .iter()
            .find(|row| row.post.id == id)
            .map(|row| row.post.clone())
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, fields: PostFields) -> Result<Post, StoreError> {
        let post = Post::from_fields(Uuid::new_v4(), Utc::now(), fields);
        self.table.write().await.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, StoreError> {
        let mut table = self.table.write().await;
        let row = table
            .rows
            .iter_mut()
            .find(|row| row.post.id == id)
            .ok_or(StoreError::NotFound)?;

        changes.apply_to(&mut row.post);
        Ok(row.post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|row| row.post.id != id);

        if table.rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fields(title: &str, category: &str) -> PostFields {
        PostFields {
            title: title.to_string(),
            content: "<p>body</p>".to_string(),
            cover_image: "https://img.example/cover.png".to_string(),
            category: category.to_string(),
            author: "Ada".to_string(),
        }
    }

    fn titles(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = InMemoryPostStore::new();
        let created = store.create(fields("Hello", "AI")).await.unwrap();

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.fields(), fields("Hello", "AI"));
    }

    #[tokio::test]
    async fn test_list_newest_first_with_arrival_tiebreak() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        let store = InMemoryPostStore::with_posts([
            Post::from_fields(Uuid::new_v4(), at, fields("tie-1", "AI")),
            Post::from_fields(Uuid::new_v4(), earlier, fields("old", "AI")),
            Post::from_fields(Uuid::new_v4(), at, fields("tie-2", "AI")),
        ]);

        let newest = store.list(&ListQuery::newest_first()).await.unwrap();
        assert_eq!(titles(&newest), vec!["tie-2", "tie-1", "old"]);

        let oldest = store
            .list(&ListQuery {
                order: Order::OldestFirst,
                category: None,
            })
            .await
            .unwrap();
        assert_eq!(titles(&oldest), vec!["old", "tie-1", "tie-2"]);
    }

    #[tokio::test]
    async fn test_category_filter_is_case_insensitive_substring() {
        let store = InMemoryPostStore::new();
        store.create(fields("cs", "Computer Science")).await.unwrap();
        store.create(fields("ml", "AI")).await.unwrap();

        let posts = store.list(&ListQuery::in_category("SCIENCE")).await.unwrap();
        assert_eq!(titles(&posts), vec!["cs"]);

        let none = store.list(&ListQuery::in_category("biology")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_identity() {
        let store = InMemoryPostStore::new();
        let created = store.create(fields("before", "AI")).await.unwrap();

        let updated = store
            .update(
                created.id,
                PostChanges {
                    title: Some("after".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "after");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.category, "AI");
    }

    #[tokio::test]
    async fn test_missing_rows_report_not_found() {
        let store = InMemoryPostStore::new();
        let id = Uuid::new_v4();

        assert_eq!(store.get(id).await, Err(StoreError::NotFound));
        assert_eq!(
            store.update(id, PostChanges::default()).await,
            Err(StoreError::NotFound)
        );
        assert_eq!(store.delete(id).await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let store = InMemoryPostStore::new();
        let created = store.create(fields("gone", "AI")).await.unwrap();

        store.delete(created.id).await.unwrap();

        assert!(store.list(&ListQuery::newest_first()).await.unwrap().is_empty());
    }
}
