//! Post store implementations - hosted REST table and in-memory fallback.

mod memory;

#[cfg(feature = "rest")]
mod rest;

pub use memory::InMemoryPostStore;

#[cfg(feature = "rest")]
pub use rest::{RestPostStore, RestStoreConfig};
