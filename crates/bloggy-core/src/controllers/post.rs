use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Post;
use crate::ports::ContentSanitizer;
use crate::services::PostRepository;

use super::notification::{self, Notification};
use super::screen::{Screen, ViewState};

/// Single-post screen. Content is sanitized before it reaches `Loaded`.
pub struct PostController {
    repo: PostRepository,
    sanitizer: Arc<dyn ContentSanitizer>,
    screen: Screen<Post>,
}

impl PostController {
    pub fn new(repo: PostRepository, sanitizer: Arc<dyn ContentSanitizer>) -> Self {
        Self {
            repo,
            sanitizer,
            screen: Screen::new(),
        }
    }

    pub async fn mount(&self, id: Uuid) -> ViewState<Post> {
        let fetch = async {
            let mut post = self.repo.get(id).await?;
            post.content = self.sanitizer.sanitize(&post.content);
            Ok(post)
        };

        self.screen.load(fetch, notification::post_failed).await;
        self.screen.snapshot().await
    }

    pub async fn state(&self) -> ViewState<Post> {
        self.screen.snapshot().await
    }

    pub async fn take_notifications(&self) -> Vec<Notification> {
        self.screen.take_notifications().await
    }
}
