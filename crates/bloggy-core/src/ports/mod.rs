//! Seams to the outside world: the post store, the session marker store and
//! the HTML sanitizer. `bloggy-infra` provides the implementations.

mod content;
mod session;
mod store;

pub use content::{ContentSanitizer, PassthroughSanitizer};
pub use session::MarkerStore;
pub use store::{ListQuery, Order, PostStore};
