use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of characters kept in a feed card excerpt.
pub const EXCERPT_LEN: usize = 150;

/// Post entity - a single blog entry.
///
/// `id` and `created_at` are assigned by the store on creation and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub title: String,
    /// HTML produced by the rich-text editor, stored verbatim.
    pub content: String,
    pub cover_image: String,
    pub category: String,
    pub author: String,
}

impl Post {
    /// Build a post from store-assigned identity and the mutable fields.
    pub fn from_fields(id: Uuid, created_at: DateTime<Utc>, fields: PostFields) -> Self {
        Self {
            id,
            created_at,
            title: fields.title,
            content: fields.content,
            cover_image: fields.cover_image,
            category: fields.category,
            author: fields.author,
        }
    }

    /// The mutable part of the post.
    pub fn fields(&self) -> PostFields {
        PostFields {
            title: self.title.clone(),
            content: self.content.clone(),
            cover_image: self.cover_image.clone(),
            category: self.category.clone(),
            author: self.author.clone(),
        }
    }

    /// Plain-text preview of the content for feed cards.
    pub fn excerpt(&self) -> String {
        let text = strip_tags(&self.content);
        let mut chars = text.chars();
        let head: String = chars.by_ref().take(EXCERPT_LEN).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }

    /// Long-form publish date, e.g. `October 19, 2026`.
    pub fn published_on(&self) -> String {
        self.created_at.format("%B %-d, %Y").to_string()
    }
}

/// The fields a post is created with. All are required and non-empty at the form level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFields {
    pub title: String,
    pub content: String,
    pub cover_image: String,
    pub category: String,
    pub author: String,
}

/// Replacement values for an existing post. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl PostChanges {
    /// Replace every mutable field.
    pub fn replace_all(fields: PostFields) -> Self {
        Self {
            title: Some(fields.title),
            content: Some(fields.content),
            cover_image: Some(fields.cover_image),
            category: Some(fields.category),
            author: Some(fields.author),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.cover_image.is_none()
            && self.category.is_none()
            && self.author.is_none()
    }

    /// Write the present fields onto `post`. Identity fields are never touched.
    pub fn apply_to(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(cover_image) = self.cover_image {
            post.cover_image = cover_image;
        }
        if let Some(category) = self.category {
            post.category = category;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
    }
}

/// Drop everything between `<` and `>`. An unterminated tag swallows the rest.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Post {
        Post::from_fields(
            Uuid::new_v4(),
            Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap(),
            PostFields {
                title: "A".to_string(),
                content: "<p>hi <strong>there</strong></p>".to_string(),
                cover_image: "u".to_string(),
                category: "AI".to_string(),
                author: "X".to_string(),
            },
        )
    }

    #[test]
    fn test_excerpt_strips_markup() {
        assert_eq!(sample().excerpt(), "hi there");
    }

    #[test]
    fn test_excerpt_truncates_long_content() {
        let mut post = sample();
        post.content = format!("<p>{}</p>", "x".repeat(200));

        let excerpt = post.excerpt();
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), EXCERPT_LEN + 3);
    }

    #[test]
    fn test_published_on_long_form() {
        assert_eq!(sample().published_on(), "October 19, 2026");
    }

    #[test]
    fn test_changes_keep_identity() {
        let mut post = sample();
        let (id, created_at) = (post.id, post.created_at);

        PostChanges {
            title: Some("B".to_string()),
            ..Default::default()
        }
        .apply_to(&mut post);

        assert_eq!(post.title, "B");
        assert_eq!(post.category, "AI");
        assert_eq!(post.id, id);
        assert_eq!(post.created_at, created_at);
    }

    #[test]
    fn test_empty_changes() {
        assert!(PostChanges::default().is_empty());
        assert!(!PostChanges::replace_all(sample().fields()).is_empty());
    }
}
