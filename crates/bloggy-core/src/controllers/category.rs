use crate::domain::{CategoryFilter, Post};
use crate::services::PostRepository;

use super::notification::{self, Notification};
use super::screen::{Screen, ViewState};

/// Loaded data of the category screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPage {
    pub filter: CategoryFilter,
    pub posts: Vec<Post>,
}

/// Category feed. Remounting with a new route parameter supersedes the previous read.
pub struct CategoryController {
    repo: PostRepository,
    screen: Screen<CategoryPage>,
}

impl CategoryController {
    pub fn new(repo: PostRepository) -> Self {
        Self {
            repo,
            screen: Screen::new(),
        }
    }

    pub async fn mount(&self, category: &str) -> ViewState<CategoryPage> {
        let filter = CategoryFilter::new(category);
        let fetch = async {
            self.repo
                .list_in_category(filter.term())
                .await
                .map(|posts| CategoryPage {
                    filter: filter.clone(),
                    posts,
                })
        };

        self.screen.load(fetch, notification::list_failed).await;
        self.screen.snapshot().await
    }

    pub async fn state(&self) -> ViewState<CategoryPage> {
        self.screen.snapshot().await
    }

    pub async fn take_notifications(&self) -> Vec<Notification> {
        self.screen.take_notifications().await
    }
}
