//! Domain entities - the core business objects.

mod category;
mod post;
mod stats;

pub use category::CategoryFilter;
pub use post::{EXCERPT_LEN, Post, PostChanges, PostFields};
pub use stats::PostStats;
