//! Durable marker stores backing the auth session.

mod file;
mod memory;

pub use file::FileMarkerStore;
pub use memory::InMemoryMarkerStore;
