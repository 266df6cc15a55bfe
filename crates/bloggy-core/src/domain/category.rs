use serde::{Deserialize, Serialize};

/// Category filter applied to the free-text `category` label.
///
/// Matching is a case-insensitive substring test, so `"computer"` and
/// `"science"` both select `"Computer Science"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter(String);

impl CategoryFilter {
    pub fn new(term: impl Into<String>) -> Self {
        Self(term.into())
    }

    /// The raw term as supplied by the route.
    pub fn term(&self) -> &str {
        &self.0
    }

    /// The term with SQL `LIKE` metacharacters (`%`, `_`, `\`) escaped by `\`.
    pub fn like_escaped(&self) -> String {
        let mut escaped = String::with_capacity(self.0.len());
        for ch in self.0.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                escaped.push('\\');
            }
            escaped.push(ch);
        }
        escaped
    }

    pub fn matches(&self, category: &str) -> bool {
        category.to_lowercase().contains(&self.0.to_lowercase())
    }

    /// Heading for the category screen: `"computer-science"` becomes `"Computer Science"`.
    pub fn display_name(&self) -> String {
        self.0
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
