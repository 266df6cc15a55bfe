//! Test doubles shared by the unit tests of this crate.

use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Notify;
use uuid::Uuid;

use crate::domain::{Post, PostChanges, PostFields};
use crate::error::{MarkerError, StoreError};
use crate::ports::{ListQuery, MarkerStore, Order, PostStore};

pub(crate) fn fields(title: &str, category: &str) -> PostFields {
    PostFields {
        title: title.to_string(),
        content: "<p>hi</p>".to_string(),
        cover_image: "u".to_string(),
        category: category.to_string(),
        author: "X".to_string(),
    }
}

/// Handles for a list call parked by [`FakeStore::hold_next_list`].
pub(crate) struct Gate {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

/// Vec-backed store with failure injection and a way to park a list call mid-flight.
#[derive(Default)]
pub(crate) struct FakeStore {
    posts: Mutex<Vec<Post>>,
    failure: Mutex<Option<StoreError>>,
    gate: Mutex<Option<Gate>>,
    update_calls: AtomicUsize,
}

impl FakeStore {
    pub fn fail_with(&self, err: StoreError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(AtomicOrdering::SeqCst)
    }

    /// The next `list` computes its result, signals `started`, then waits for `release`.
    pub fn hold_next_list(&self) -> Gate {
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(Gate {
            started: started.clone(),
            release: release.clone(),
        });
        Gate { started, release }
    }

    fn check(&self) -> Result<(), StoreError> {
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PostStore for FakeStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Post>, StoreError> {
        let result = self.check().map(|_| {
            let posts = self.posts.lock().unwrap();
            let mut matching: Vec<Post> = posts
                .iter()
                .filter(|p| query.category.as_ref().is_none_or(|c| c.matches(&p.category)))
                .cloned()
                .collect();
            if query.order == Order::NewestFirst {
                matching.reverse();
            }
            matching
        });

        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }

        result
    }

    async fn get(&self, id: Uuid) -> Result<Post, StoreError> {
        self.check()?;
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, fields: PostFields) -> Result<Post, StoreError> {
        self.check()?;
        let post = Post::from_fields(Uuid::new_v4(), Utc::now(), fields);
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, StoreError> {
        self.check()?;
        self.update_calls.fetch_add(1, AtomicOrdering::SeqCst);
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        changes.apply_to(post);
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.check()?;
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

/// Marker store kept in a mutex-guarded map, optionally failing every call.
#[derive(Default)]
pub(crate) struct FakeMarkers {
    values: Mutex<std::collections::HashMap<String, String>>,
    broken: std::sync::atomic::AtomicBool,
}

impl FakeMarkers {
    pub fn with(key: &str, value: &str) -> Self {
        let markers = Self::default();
        markers
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        markers
    }

    pub fn break_storage(&self) {
        self.broken.store(true, AtomicOrdering::SeqCst);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn check(&self) -> Result<(), MarkerError> {
        if self.broken.load(AtomicOrdering::SeqCst) {
            return Err(MarkerError::Io("disk unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl MarkerStore for FakeMarkers {
    async fn load(&self, key: &str) -> Result<Option<String>, MarkerError> {
        self.check()?;
        Ok(self.get(key))
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), MarkerError> {
        self.check()?;
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), MarkerError> {
        self.check()?;
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}
