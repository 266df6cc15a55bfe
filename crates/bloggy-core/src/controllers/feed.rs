use crate::domain::Post;
use crate::services::PostRepository;

use super::notification::{self, Notification};
use super::screen::{Screen, Settled, ViewState};

/// Home feed: every post, newest first.
pub struct FeedController {
    repo: PostRepository,
    screen: Screen<Vec<Post>>,
}

impl FeedController {
    pub fn new(repo: PostRepository) -> Self {
        Self {
            repo,
            screen: Screen::new(),
        }
    }

    /// Issue exactly one list read and return the resulting state.
    pub async fn mount(&self) -> ViewState<Vec<Post>> {
        if self
            .screen
            .load(self.repo.list_all(), notification::list_failed)
            .await
            == Settled::Superseded
        {
            tracing::debug!("Feed mount superseded");
        }
        self.screen.snapshot().await
    }

    pub async fn state(&self) -> ViewState<Vec<Post>> {
        self.screen.snapshot().await
    }

    pub async fn take_notifications(&self) -> Vec<Notification> {
        self.screen.take_notifications().await
    }
}
