//! Application services built on the ports.

mod auth;
mod repository;

pub use auth::{AUTH_MARKER_KEY, AUTH_MARKER_VALUE, AuthSession, DEFAULT_ADMIN_PASSWORD};
pub use repository::PostRepository;
