//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to publish a new post. Every field is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub cover_image: String,
    pub category: String,
    pub author: String,
}

impl CreatePostRequest {
    /// Names of the fields that are blank.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let missing: Vec<String> = [
            ("title", &self.title),
            ("content", &self.content),
            ("cover_image", &self.cover_image),
            ("category", &self.category),
            ("author", &self.author),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(name, _)| format!("{name} is required"))
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }
}

/// Request to edit a post. Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
}

impl UpdatePostRequest {
    /// Names of the fields that are present but blank.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let blank: Vec<String> = [
            ("title", &self.title),
            ("content", &self.content),
            ("cover_image", &self.cover_image),
            ("category", &self.category),
            ("author", &self.author),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_some_and(is_blank))
        .map(|(name, _)| format!("{name} must not be empty"))
        .collect();

        if blank.is_empty() {
            Ok(())
        } else {
            Err(blank)
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Request to sign in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Whether the admin session is signed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub authenticated: bool,
}

/// A full post, as shown on the single-post screen and in the admin table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub created_at: String,
    pub published_on: String,
    pub title: String,
    pub content: String,
    pub cover_image: String,
    pub category: String,
    pub author: String,
}

/// A post summary, as shown on feed cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCardResponse {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub cover_image: String,
    pub category: String,
    pub author: String,
    pub published_on: String,
    /// Link to the single-post screen.
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPageResponse {
    pub category: String,
    pub display_name: String,
    pub posts: Vec<PostCardResponse>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_posts: usize,
    pub categories: usize,
    pub authors: usize,
}

/// Admin screen payload: the post table and the stats tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub posts: Vec<PostResponse>,
    pub stats: StatsResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub id: String,
}

/// A toast-style message raised by a screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationDto {
    /// `default` or `destructive`.
    pub variant: String,
    pub title: String,
    pub description: String,
}
