use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{Post, PostChanges, PostFields, PostStats};
use crate::error::PostError;
use crate::services::PostRepository;

use super::notification::{self, Notification};
use super::screen::{Screen, Settled, ViewState};

/// Admin dashboard: the post table plus create/update/delete.
///
/// Mutations touch the local list only after the store call succeeds, so a
/// failure never needs a rollback. There is no re-fetch after a mutation.
///
/// One controller serves every admin request, so mounts are serialized. A
/// mutation that lands while a mount is reading supersedes that read and the
/// mount reads again.
pub struct AdminController {
    repo: PostRepository,
    screen: Screen<Vec<Post>>,
    mounting: Mutex<()>,
}

impl AdminController {
    pub fn new(repo: PostRepository) -> Self {
        Self {
            repo,
            screen: Screen::new(),
            mounting: Mutex::new(()),
        }
    }

    pub async fn mount(&self) -> ViewState<Vec<Post>> {
        let _guard = self.mounting.lock().await;
        self.reload().await
    }

    /// Mount unless the list is already loaded.
    pub async fn open(&self) -> ViewState<Vec<Post>> {
        let _guard = self.mounting.lock().await;
        let state = self.screen.snapshot().await;
        if state.is_loaded() {
            return state;
        }
        self.reload().await
    }

    async fn reload(&self) -> ViewState<Vec<Post>> {
        loop {
            let settled = self
                .screen
                .load(self.repo.list_all(), notification::list_failed)
                .await;
            if settled == Settled::Applied {
                break;
            }
            tracing::debug!("Admin list changed mid-read, reading again");
        }
        self.screen.snapshot().await
    }

    pub async fn state(&self) -> ViewState<Vec<Post>> {
        self.screen.snapshot().await
    }

    /// Counters over the loaded list, if any.
    pub async fn stats(&self) -> Option<PostStats> {
        self.screen
            .snapshot()
            .await
            .loaded()
            .map(|posts| PostStats::from_posts(posts))
    }

    /// Create a post and prepend it to the loaded list.
    pub async fn create(&self, fields: PostFields) -> Result<Post, PostError> {
        match self.repo.create(fields).await {
            Ok(post) => {
                let local = post.clone();
                self.screen
                    .modify_or_invalidate(move |posts| posts.insert(0, local))
                    .await;
                self.screen.notify(notification::created()).await;
                Ok(post)
            }
            Err(err) => {
                self.screen.notify(notification::create_failed()).await;
                Err(err)
            }
        }
    }

    /// Update a post and replace it in the loaded list.
    pub async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, PostError> {
        match self.repo.update(id, changes).await {
            Ok(post) => {
                let local = post.clone();
                self.screen
                    .modify_or_invalidate(move |posts| {
                        if let Some(slot) = posts.iter_mut().find(|p| p.id == local.id) {
                            *slot = local;
                        }
                    })
                    .await;
                self.screen.notify(notification::updated()).await;
                Ok(post)
            }
            Err(err) => {
                self.screen.notify(notification::update_failed()).await;
                Err(err)
            }
        }
    }

    /// Delete a post and remove it from the loaded list.
    ///
    /// A post the store no longer has is treated as already deleted.
    pub async fn delete(&self, id: Uuid) -> Result<(), PostError> {
        match self.repo.delete(id).await {
            Ok(()) | Err(PostError::NotFound(_)) => {
                self.screen
                    .modify_or_invalidate(|posts| posts.retain(|p| p.id != id))
                    .await;
                self.screen.notify(notification::deleted()).await;
                Ok(())
            }
            Err(err) => {
                self.screen.notify(notification::delete_failed()).await;
                Err(err)
            }
        }
    }

    pub async fn take_notifications(&self) -> Vec<Notification> {
        self.screen.take_notifications().await
    }
}
