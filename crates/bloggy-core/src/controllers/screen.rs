//! Per-screen state cell: `Loading → {Loaded | Failed}` guarded by a generation counter.

use std::future::Future;

use tokio::sync::RwLock;

use super::notification::Notification;
use crate::error::PostError;

/// What a screen currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Loaded(T),
    Failed(PostError),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ViewState::Loaded(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&PostError> {
        match self {
            ViewState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewState<U> {
        match self {
            ViewState::Loading => ViewState::Loading,
            ViewState::Loaded(data) => ViewState::Loaded(f(data)),
            ViewState::Failed(err) => ViewState::Failed(err),
        }
    }
}

/// Proof of which fetch a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Outcome of [`Screen::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    /// A newer fetch began after this one; the result was dropped.
    Superseded,
}

struct Inner<T> {
    generation: u64,
    state: ViewState<T>,
    notifications: Vec<Notification>,
}

/// State and pending notifications of one screen.
pub struct Screen<T> {
    inner: RwLock<Inner<T>>,
}

impl<T> Default for Screen<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Screen<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                generation: 0,
                state: ViewState::Loading,
                notifications: Vec::new(),
            }),
        }
    }
}

impl<T: Clone + Send + Sync> Screen<T> {
    /// Enter `Loading` and supersede any fetch still in flight.
    pub async fn begin(&self) -> FetchTicket {
        let mut inner = self.inner.write().await;
        inner.generation += 1;
        inner.state = ViewState::Loading;
        FetchTicket {
            generation: inner.generation,
        }
    }

    /// Apply a fetch result if its ticket is still current.
    pub async fn settle(&self, ticket: FetchTicket, outcome: Result<T, PostError>) -> Settled {
        let mut inner = self.inner.write().await;
        if ticket.generation != inner.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = inner.generation,
                "Dropping superseded fetch result"
            );
            return Settled::Superseded;
        }

        inner.state = match outcome {
            Ok(data) => ViewState::Loaded(data),
            Err(err) => ViewState::Failed(err),
        };
        Settled::Applied
    }

    /// Run one read: `begin`, await `fetch`, `settle`, and queue `on_failure` if
    /// the applied outcome was an error.
    pub async fn load<F>(&self, fetch: F, on_failure: impl FnOnce() -> Notification) -> Settled
    where
        F: Future<Output = Result<T, PostError>>,
    {
        let ticket = self.begin().await;
        let outcome = fetch.await;
        let failed = outcome.is_err();

        let settled = self.settle(ticket, outcome).await;
        if settled == Settled::Applied && failed {
            self.notify(on_failure()).await;
        }
        settled
    }

    pub async fn snapshot(&self) -> ViewState<T> {
        self.inner.read().await.state.clone()
    }

    /// Mutate the loaded data in place. When nothing is loaded, supersede any
    /// fetch in flight instead: its result was read before the change.
    pub async fn modify_or_invalidate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut inner = self.inner.write().await;
        match &mut inner.state {
            ViewState::Loaded(data) => Some(f(data)),
            _ => {
                inner.generation += 1;
                None
            }
        }
    }

    pub async fn notify(&self, notification: Notification) {
        self.inner.write().await.notifications.push(notification);
    }

    /// Drain queued notifications, oldest first.
    pub async fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut self.inner.write().await.notifications)
    }
}
