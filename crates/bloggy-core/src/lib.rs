//! # Bloggy Core
//!
//! The domain layer of the Bloggy publishing app.
//! This crate contains the post model, the store and session ports, the post
//! repository, the auth session and the per-screen view-state controllers.
//! It performs no I/O of its own.

pub mod controllers;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{PostError, StoreError};
