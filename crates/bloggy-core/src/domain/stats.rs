use std::collections::HashSet;

use serde::Serialize;

use super::Post;

/// Dashboard counters over a list of posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PostStats {
    pub total_posts: usize,
    pub categories: usize,
    pub authors: usize,
}

impl PostStats {
    /// Distinct counts use exact string equality, so `"AI"` and `"ai"` count twice.
    pub fn from_posts(posts: &[Post]) -> Self {
        let categories: HashSet<&str> = posts.iter().map(|p| p.category.as_str()).collect();
        let authors: HashSet<&str> = posts.iter().map(|p| p.author.as_str()).collect();

        Self {
            total_posts: posts.len(),
            categories: categories.len(),
            authors: authors.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostFields;
    use chrono::Utc;
    use uuid::Uuid;

    fn post(category: &str, author: &str) -> Post {
        Post::from_fields(
            Uuid::new_v4(),
            Utc::now(),
            PostFields {
                category: category.to_string(),
                author: author.to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_distinct_counts() {
        let posts = vec![post("AI", "X"), post("AI", "Y"), post("ai", "X")];
        let stats = PostStats::from_posts(&posts);

        assert_eq!(stats.total_posts, 3);
        assert_eq!(stats.categories, 2);
        assert_eq!(stats.authors, 2);
    }

    #[test]
    fn test_empty() {
        assert_eq!(PostStats::from_posts(&[]), PostStats::default());
    }
}
