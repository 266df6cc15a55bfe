//! View-state controllers - one per screen.
//!
//! Each controller owns a [`Screen`] and drives it through
//! `Loading → {Loaded | Failed}` by issuing exactly one repository read per mount.

mod admin;
mod category;
mod feed;
mod notification;
mod post;
mod screen;

pub use admin::AdminController;
pub use category::{CategoryController, CategoryPage};
pub use feed::FeedController;
pub use notification::{Notification, NotificationVariant};
pub use post::PostController;
pub use screen::{FetchTicket, Screen, Settled, ViewState};
